use crate::features::villages::models::{Village, VILLAGES};

/// Lookups over the static village reference table
pub struct VillageService {
    villages: &'static [Village],
}

impl Default for VillageService {
    fn default() -> Self {
        Self::new()
    }
}

impl VillageService {
    pub fn new() -> Self {
        Self { villages: VILLAGES }
    }

    /// Find a village by its id
    pub fn find(&self, id: &str) -> Option<&'static Village> {
        self.villages.iter().find(|v| v.id == id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.villages.len()
    }

    /// Villages grouped by district, districts in first-seen order
    pub fn grouped_by_district(&self) -> Vec<(&'static str, Vec<&'static Village>)> {
        let mut groups: Vec<(&'static str, Vec<&'static Village>)> = Vec::new();

        for village in self.villages {
            match groups.iter_mut().find(|(d, _)| *d == village.district) {
                Some((_, members)) => members.push(village),
                None => groups.push((village.district, vec![village])),
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_village_ids_are_unique() {
        let ids: HashSet<&str> = VILLAGES.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), VILLAGES.len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        let service = VillageService::new();

        let kolar = service.find("kolar-kolar").unwrap();
        assert_eq!(kolar.name, "Kolar");
        assert_eq!(kolar.district, "Kolar");

        assert!(service.exists("other"));
        assert!(!service.exists("atlantis"));
        assert!(!service.exists(""));
        // Ids are matched exactly
        assert!(!service.exists("Kolar-Kolar"));
    }

    #[test]
    fn test_grouped_by_district_keeps_table_order() {
        let service = VillageService::new();
        let groups = service.grouped_by_district();

        let districts: Vec<&str> = groups.iter().map(|(d, _)| *d).collect();
        assert_eq!(districts.first(), Some(&"Kolar"));
        assert_eq!(districts.last(), Some(&"Other"));
        assert_eq!(districts.len(), 10);

        let total: usize = groups.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, service.count());

        let (_, kolar) = &groups[0];
        assert_eq!(kolar.len(), 5);
        assert!(kolar.iter().all(|v| v.district == "Kolar"));
    }
}
