use strum::{EnumString, IntoStaticStr, VariantArray};

/// Services a visitor can tick on the contact form.
///
/// Variant order is the order the form lists them, and the order they are
/// joined in when sent to the form endpoint.
#[derive(EnumString, VariantArray, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceOption {
    #[strum(serialize = "話だけ聞いてみたい")]
    JustTalk,
    #[strum(serialize = "ライフコーチング")]
    LifeCoaching,
    #[strum(serialize = "ストレングスコーチング")]
    StrengthsCoaching,
}

impl ServiceOption {
    /// Every option, in form order.
    pub fn all() -> impl Iterator<Item = ServiceOption> {
        Self::VARIANTS.iter().copied()
    }

    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Joins the selected options with `", "` in declaration order.
    ///
    /// An empty selection yields an empty string.
    pub fn join(selected: &[ServiceOption]) -> String {
        Self::VARIANTS
            .iter()
            .filter(|option| selected.contains(*option))
            .map(|option| option.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_label_matches_form_value() {
        for option in ServiceOption::VARIANTS {
            assert_eq!(
                ServiceOption::from_str(option.label()).ok(),
                Some(*option)
            );
        }
    }

    #[test]
    fn test_join_follows_declaration_order() {
        let joined = ServiceOption::join(&[
            ServiceOption::StrengthsCoaching,
            ServiceOption::LifeCoaching,
        ]);

        assert_eq!(joined, "ライフコーチング, ストレングスコーチング");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(ServiceOption::join(&[]), "");
    }
}
