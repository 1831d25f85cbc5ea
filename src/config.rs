use crate::columns::ColumnAliases;

pub static DEFAULT_AERODROME_SOURCE: &str = "AD-HEL-ULM.csv";
pub static DEFAULT_LOCALITY_SOURCE: &str = "Localidades-Nova-versao-230223.csv";

/// Noise filtering for the AD/HEL/ULM listing.
#[derive(Clone, Debug)]
pub struct AerodromeRules {
    /// Lines starting with any of these are column headers or unrelated content.
    pub header_markers: Vec<String>,
}

impl Default for AerodromeRules {
    fn default() -> Self {
        AerodromeRules {
            header_markers: vec!["Ident".to_owned(), "DEP/".to_owned()],
        }
    }
}

impl AerodromeRules {
    pub fn is_noise(&self, line: &str) -> bool {
        self.header_markers.iter().any(|m| line.starts_with(m.as_str()))
    }
}

/// Noise filtering for the locality listing.
#[derive(Clone, Debug)]
pub struct LocalityRules {
    /// Phrase marking the record-count footer.
    pub footer_marker: String,
}

impl Default for LocalityRules {
    fn default() -> Self {
        LocalityRules {
            footer_marker: "Total de registos".to_owned(),
        }
    }
}

impl LocalityRules {
    pub fn is_noise(&self, line: &str) -> bool {
        line.contains(self.footer_marker.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub aerodrome_source: String,
    pub locality_source: String,
    pub aerodrome_rules: AerodromeRules,
    pub locality_rules: LocalityRules,
    pub aerodrome_columns: ColumnAliases,
    pub locality_columns: ColumnAliases,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            aerodrome_source: DEFAULT_AERODROME_SOURCE.to_owned(),
            locality_source: DEFAULT_LOCALITY_SOURCE.to_owned(),
            aerodrome_rules: AerodromeRules::default(),
            locality_rules: LocalityRules::default(),
            aerodrome_columns: ColumnAliases::aerodromes(),
            locality_columns: ColumnAliases::localities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aerodrome_markers_match_line_start_only() {
        let rules = AerodromeRules::default();
        assert!(rules.is_noise("Ident Nome Coordenadas"));
        assert!(rules.is_noise("DEP/ARR procedures"));
        assert!(!rules.is_noise("LPPT Ident 384643N 0091342W"));
    }

    #[test]
    fn locality_footer_matches_anywhere() {
        let rules = LocalityRules::default();
        assert!(rules.is_noise("  Total de registos: 412"));
        assert!(!rules.is_noise("ABRANTES 392700N 0081100W ABRAN SECTOR1"));
    }
}
