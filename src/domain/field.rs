//! Form field identity.

use std::fmt;

/// The two credential fields a login form binds.
///
/// Identity only. Validation rules live on the page elements themselves;
/// the controller reads each field's native-constraint verdict through
/// [`crate::domain::ports::LoginSurface::check_validity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// Both fields in page order (username before password).
    ///
    /// Focus-first-invalid walks this order.
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Password => f.write_str("password"),
        }
    }
}
