//! Closed string-tagged enumerations (statuses, conditions).

/// Implements `ALL`, `as_str`, `label`, `Display` and `FromStr` for a fieldless
/// enum whose variants map to a lowercase wire token and a display label.
///
/// Parsing is ASCII case-insensitive; unknown tokens are a validation error.
macro_rules! impl_tag {
    ($t:ident, $name:literal, { $($variant:ident => ($token:literal, $label:literal)),+ $(,)? }) => {
        impl $t {
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            /// Wire token (matches the serde representation).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($t::$variant => $token),+
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($t::$variant => $label),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl core::str::FromStr for $t {
            type Err = stockroom_core::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                $(
                    if token.eq_ignore_ascii_case($token) {
                        return Ok($t::$variant);
                    }
                )+
                Err(stockroom_core::DomainError::validation(format!(
                    "{}: unknown value {:?}",
                    $name, s
                )))
            }
        }
    };
}
