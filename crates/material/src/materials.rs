//! An ordered collection of materials with batched nuclide loading (spec §4.7)

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Index, IndexMut};

use crate::error::Result;
use crate::material::Material;

/// An ordered collection of [`Material`]s
///
/// `read_nuclides_from_json` is strictly a batching optimisation over
/// per-material lazy loading: for each nuclide id referenced by at least one
/// member, it computes the union of temperature labels demanded across
/// members and requests that exact set from the loader once, so a nuclide
/// shared by several materials at different temperatures is fetched a single
/// time rather than once per material (spec §4.7, scenario 6 in §8).
#[derive(Debug, Clone, Default)]
pub struct Materials(Vec<Material>);

impl Materials {
    /// An empty collection
    pub fn new() -> Self {
        Materials(Vec::new())
    }

    /// Append a material to the end of the collection
    pub fn append(&mut self, material: Material) {
        self.0.push(material);
    }

    /// Number of materials in the collection
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the collection holds no materials
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the material at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Material> {
        self.0.get(index)
    }

    /// Mutably borrow the material at `index`, if present
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.0.get_mut(index)
    }

    /// Iterate over the contained materials
    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.0.iter()
    }

    /// For each nuclide id referenced by any member material, load the union
    /// of temperature labels demanded across members, once per id
    pub fn read_nuclides_from_json(&self) -> Result<()> {
        let mut wanted: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for material in &self.0 {
            for id in material.nuclides.keys() {
                wanted.entry(id.clone()).or_default().insert(material.temperature.clone());
            }
        }

        for (id, temperatures) in wanted {
            let temperatures: Vec<String> = temperatures.into_iter().collect();
            log::debug!("batch loading {id} at temperatures {temperatures:?}");
            nucdata_nuclide::load(&id, None, Some(&temperatures))?;
        }
        Ok(())
    }
}

impl Index<usize> for Materials {
    type Output = Material;
    fn index(&self, index: usize) -> &Material {
        &self.0[index]
    }
}

impl IndexMut<usize> for Materials {
    fn index_mut(&mut self, index: usize) -> &mut Material {
        &mut self.0[index]
    }
}

impl FromIterator<Material> for Materials {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        Materials(iter.into_iter().collect())
    }
}

impl IntoIterator for Materials {
    type Item = Material;
    type IntoIter = std::vec::IntoIter<Material>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_index() {
        let mut materials = Materials::new();
        materials.append(Material::new());
        materials.append(Material::new());
        assert_eq!(materials.len(), 2);
        materials[0].add_nuclide("Li6", 1.0);
        assert_eq!(materials[0].get_nuclide_names(), vec!["Li6".to_string()]);
    }

    #[test]
    fn read_nuclides_from_json_is_empty_collection_noop() {
        let materials = Materials::new();
        assert!(materials.read_nuclides_from_json().is_ok());
    }
}
