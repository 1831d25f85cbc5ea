//! VRC sector file sections.

use tracing::warn;

use crate::extract::{Category, GeoPoint};

static VRC_SEPERATOR: &str =
    "\n\n;===============================================================================\n\n";

pub fn to_sct(points: &[GeoPoint]) -> String {
    let mut sct = String::new();

    sct += VRC_SEPERATOR;
    sct += "[AIRPORT]\n";

    for p in points.iter().filter(|p| p.source == Category::Aerodrome) {
        match &p.identifier {
            Some(ident) => {
                sct += &format!("{:4} {:7} {} E\n", ident, "000.000", p.latlon().to_vrc());
            }
            None => warn!("No ident on AD/HEL/ULM {}, ignoring!", p.name),
        }
    }

    sct += VRC_SEPERATOR;
    sct += "[FIXES]\n";

    for p in points.iter().filter(|p| p.source == Category::Locality) {
        match &p.identifier {
            Some(code) => sct += &format!("{} {}\n", code, p.latlon().to_vrc()),
            None => warn!("No code on locality {}, ignoring!", p.name),
        }
    }

    sct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AerodromeRules, LocalityRules};
    use crate::extract::{parse_aerodrome_line, parse_locality_line};

    #[test]
    fn sections() {
        let ad = AerodromeRules::default();
        let points = vec![
            parse_locality_line("ABRANTES 392700N 0081100W ABRAN SECTOR1", &LocalityRules::default()).unwrap(),
            parse_aerodrome_line("LPPT LISBOA 384643N 0091342W LISBOA", &ad).unwrap(),
            parse_aerodrome_line("campo 390000N 0080000W", &ad).unwrap(),
        ];
        let sct = to_sct(&points);
        let airport = sct.find("[AIRPORT]").unwrap();
        let fixes = sct.find("[FIXES]").unwrap();
        let lppt = sct.find("LPPT 000.000 N038.46.43.000 W009.13.42.000 E").unwrap();
        let abran = sct.find("ABRAN N039.27.00.000 W008.11.00.000").unwrap();
        assert!(airport < lppt && lppt < fixes && fixes < abran);
        assert!(!sct.contains("campo"));
    }
}
