macro_rules! impl_id {
    ($name:ident, $tp:ty) => {
        /// The ID type $name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub(crate) struct $name($tp);

        impl $name {
            /// Create a new id.
            #[inline]
            pub(crate) const fn new(index: $tp) -> Self {
                $name(index)
            }

            /// Get the id as usize.
            #[allow(dead_code)]
            #[inline]
            pub(crate) fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0 as usize]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: $name) -> &Self::Output {
                &self[index.0 as usize]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$tp> for $name {
            fn from(index: $tp) -> Self {
                $name::new(index)
            }
        }
    };
}

/// The ID type for lexer states. This is the index of the state in the state vector of the lexer.
/// The state with index 0 is the initial state.
pub(crate) type StateIDBase = usize;
impl_id!(StateID, StateIDBase);

/// The ID type for rules. This is the index of the rule in the rule vector of a lexer state. It
/// determines the priority of the rule, i.e. lower indices have higher priority.
pub(crate) type RuleIDBase = usize;
impl_id!(RuleID, RuleIDBase);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        let states = vec!["root", "class"];
        let id: StateID = 1.into();
        assert_eq!(states[id], "class");
        assert_eq!(id.as_usize(), 1);
        assert_eq!(format!("{}", RuleID::new(3)), "3");
        assert_eq!(RuleID::new(3).as_usize(), 3);
    }
}
