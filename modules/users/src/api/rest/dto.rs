use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewUser, User, UserUpdate};

/// REST DTO for user representation with serde/utoipa.
/// Dates travel as `YYYY-MM-DD`; the friend set as a sorted id array.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
    pub friends: Vec<i64>,
}

/// REST DTO for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

/// REST DTO for updating a user (full replacement, id in the body).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserReq {
    pub id: Option<i64>,
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub birthday: NaiveDate,
    #[serde(default)]
    pub friends: Vec<i64>,
}

// Conversions between REST DTOs and contract models.

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            login: user.login,
            name: user.name,
            birthday: user.birthday,
            friends: user.friends.into_iter().collect(),
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            email: req.email,
            login: req.login,
            name: req.name,
            birthday: req.birthday,
        }
    }
}

impl From<UpdateUserReq> for UserUpdate {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            email: req.email,
            login: req.login,
            name: req.name,
            birthday: req.birthday,
            friends: req.friends.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn dto_sorts_friend_ids() {
        let user = User {
            id: 1,
            email: "a@b.c".into(),
            login: "a".into(),
            name: "a".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            friends: BTreeSet::from([9, 2, 5]),
        };
        let dto = UserDto::from(user);
        assert_eq!(dto.friends, vec![2, 5, 9]);
    }

    #[test]
    fn birthday_travels_as_iso_date() {
        let req: CreateUserReq = serde_json::from_value(serde_json::json!({
            "email": "a@b.c",
            "login": "a",
            "birthday": "1990-05-01"
        }))
        .unwrap();
        assert_eq!(req.birthday, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
        assert_eq!(req.name, None);
    }
}
