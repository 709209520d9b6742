use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::SignupParams,
    service::member::MemberService,
};
use test_utils::{builder::TestBuilder, factory};

mod signup;

fn signup_params(email: &str, nickname: &str) -> SignupParams {
    SignupParams {
        email: email.to_string(),
        password: "correct horse".to_string(),
        nickname: nickname.to_string(),
    }
}
