#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod employee_get_tests;

#[cfg(test)]
mod employee_write_tests;

#[cfg(test)]
mod unauthorized_tests;

#[cfg(test)]
mod form_submit_tests;

#[cfg(test)]
mod list_view_tests;
