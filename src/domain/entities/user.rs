//! Domain entity representing a user record.

/// A persisted user.
///
/// `id` is generated once at creation and never rewritten afterwards.
/// The password is stored and returned as given; it is not hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: String, username: String, email: String, password: String) -> Self {
        Self {
            id,
            username,
            email,
            password,
        }
    }
}

/// Input data for creating a new user. The identifier is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Replacement values for an existing user's mutable fields.
///
/// Updates are full replacements: every field overwrites the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "1b4e28ba-2fa1-11d2-883f-0016d3cca427".to_string(),
            "username".to_string(),
            "admin@mail.com".to_string(),
            "password".to_string(),
        );

        assert_eq!(user.id, "1b4e28ba-2fa1-11d2-883f-0016d3cca427");
        assert_eq!(user.username, "username");
        assert_eq!(user.email, "admin@mail.com");
        assert_eq!(user.password, "password");
    }

    #[test]
    fn test_new_user_has_no_id() {
        let new_user = NewUser {
            username: "username".to_string(),
            email: "admin@mail.com".to_string(),
            password: "password".to_string(),
        };

        assert_eq!(new_user.username, "username");
    }
}
