#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub suburb   : Option<String>,
    pub city     : Option<String>,
    pub town     : Option<String>,
    pub village  : Option<String>,
    pub state    : Option<String>,
    pub postcode : Option<String>,
    pub country  : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.suburb.is_none()
            && self.city.is_none()
            && self.town.is_none()
            && self.village.is_none()
            && self.state.is_none()
            && self.postcode.is_none()
            && self.country.is_none()
    }

    /// The most specific locality name available.
    pub fn locality(&self) -> Option<&str> {
        self.suburb
            .as_deref()
            .or(self.city.as_deref())
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locality_prefers_suburb() {
        let addr = Address {
            suburb: Some("Carlton".into()),
            city: Some("Melbourne".into()),
            ..Default::default()
        };
        assert_eq!(addr.locality(), Some("Carlton"));
    }

    #[test]
    fn locality_falls_back_to_town_or_village() {
        let mut addr = Address {
            town: Some("Bright".into()),
            village: Some("Wandiligong".into()),
            ..Default::default()
        };
        assert_eq!(addr.locality(), Some("Bright"));
        addr.town = None;
        assert_eq!(addr.locality(), Some("Wandiligong"));
    }

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        let addr = Address {
            state: Some("VIC".into()),
            ..Default::default()
        };
        assert!(!addr.is_empty());
    }
}
