//! Person records served by the fixture API.

use serde::{Deserialize, Serialize};

/// Regular community member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub occupation: String,
}

/// Community administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub age: u32,
    pub role: String,
}

/// Either kind of community member, tagged under `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Person {
    User(User),
    Admin(Admin),
}

impl Person {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User(u) => &u.name,
            Self::Admin(a) => &a.name,
        }
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        match self {
            Self::User(u) => u.age,
            Self::Admin(a) => a.age,
        }
    }

    /// Role for admins, occupation for users.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::User(u) => &u.occupation,
            Self::Admin(a) => &a.role,
        }
    }
}

impl From<User> for Person {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

impl From<Admin> for Person {
    fn from(admin: Admin) -> Self {
        Self::Admin(admin)
    }
}

fn user(name: &str, age: u32, occupation: &str) -> User {
    User {
        name: name.to_string(),
        age,
        occupation: occupation.to_string(),
    }
}

fn admin(name: &str, age: u32, role: &str) -> Admin {
    Admin {
        name: name.to_string(),
        age,
        role: role.to_string(),
    }
}

/// Registered users, in registration order.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        user("Max Mustermann", 25, "Chimney sweep"),
        user("Kate Müller", 23, "Astronaut"),
    ]
}

/// Registered admins, in registration order.
#[must_use]
pub fn admins() -> Vec<Admin> {
    vec![
        admin("Jane Doe", 32, "Administrator"),
        admin("Bruce Willis", 64, "World saver"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_with_type_tag() {
        let person = Person::from(users().remove(0));
        let json = serde_json::to_value(&person).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "user",
                "name": "Max Mustermann",
                "age": 25,
                "occupation": "Chimney sweep",
            })
        );
    }

    #[test]
    fn admin_deserializes_from_tagged_json() {
        let person: Person = serde_json::from_str(
            r#"{"type":"admin","name":"Jane Doe","age":32,"role":"Administrator"}"#,
        )
        .expect("deserialize");
        assert_eq!(person, Person::Admin(admins().remove(0)));
    }

    #[test]
    fn detail_picks_role_or_occupation() {
        let admin = Person::from(admins().remove(1));
        assert_eq!(admin.detail(), "World saver");
        assert_eq!(admin.age(), 64);

        let user = Person::from(users().remove(1));
        assert_eq!(user.detail(), "Astronaut");
        assert_eq!(user.name(), "Kate Müller");
    }
}
