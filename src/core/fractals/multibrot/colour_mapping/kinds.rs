#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultibrotColourMapKinds {
    /// Hue walks the wheel with the escape count.
    #[default]
    Rainbow,
    /// Hue is the reciprocal of the rainbow hue, offset by 0.1.
    Inverted,
}

impl MultibrotColourMapKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Inverted => "Inverted rainbow",
        }
    }
}

impl std::fmt::Display for MultibrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainbow_is_the_default() {
        assert_eq!(MultibrotColourMapKinds::default(), MultibrotColourMapKinds::Rainbow);
    }

    #[test]
    fn display_uses_the_scheme_name() {
        assert_eq!(MultibrotColourMapKinds::Rainbow.to_string(), "Rainbow");
        assert_eq!(MultibrotColourMapKinds::Inverted.to_string(), "Inverted rainbow");
    }
}
