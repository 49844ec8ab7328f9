
use accounts_test_utils::prelude::*;

use crate::model::user::CreateUserDto;

fn payload(name: Option<&str>, email: &str, password: &str) -> CreateUserDto {
    CreateUserDto {
        name: name.map(str::to_string),
        email: email.to_string(),
        password: password.to_string(),
    }
}
