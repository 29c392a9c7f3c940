use client::auth::jwt::derive_session;
use client::auth::now_ms;
use client::auth::session::{restore, sign_in, sign_out};
use client::auth::store::MemoryTokenStore;
use client::TokenStore;
use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, Role};

use crate::common::{self, in_an_hour, mint_token, PASSWORD, USERNAME};

#[tokio::test]
async fn test_signed_in_session_survives_restore() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.client();
    let signed_in = sign_in(
        &api,
        LoginRequest {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .await
    .unwrap();

    let restored = restore(api.token_store().as_ref(), now_ms());
    assert_eq!(restored, Some(signed_in));

    sign_out(api.token_store().as_ref());
    assert_eq!(restore(api.token_store().as_ref(), now_ms()), None);
}

#[test]
fn test_expired_token_is_dropped_on_restore() {
    let expired = mint_token("amy", &["ADMIN"], chrono::Utc::now().timestamp() - 5);
    let store = MemoryTokenStore::with_token(expired);
    assert_eq!(restore(&store, now_ms()), None);
    assert_eq!(store.get(), None);
}

#[test]
fn test_unknown_roles_are_ignored() {
    let token = mint_token("erin", &["EMPLOYEE", "JANITOR"], in_an_hour());
    let session = derive_session(Some(&token), now_ms()).unwrap();
    assert_eq!(session.roles, vec![Role::Employee]);
}
