/// Geometry definitions — the rows of the client's geometry collection.
///
/// A GeometryDef is pure data: named triangle-list vertex positions plus
/// indices. Uploading it to the rendering backend is the geometry
/// injector's job; nothing here touches GPU state.

use glam::Vec3;
use slotmap::new_key_type;
use crate::collection::CollectionRow;
use crate::error::Nova3dResult;
use crate::client_bail;

new_key_type! {
    /// Stable key for a GeometryDef within the geometry collection.
    pub struct GeometryKey;
}

/// A named triangle-list geometry definition.
#[derive(Debug, Clone)]
pub struct GeometryDef {
    /// Unique name within the geometry collection
    name: String,
    /// Vertex positions
    positions: Vec<Vec3>,
    /// Triangle indices into `positions` (length is a multiple of 3)
    indices: Vec<u32>,
}

impl GeometryDef {
    /// Create a geometry definition, validating the index data.
    ///
    /// # Errors
    ///
    /// Fails if there are no vertices, the index count is not a multiple
    /// of 3, or any index is out of range.
    pub fn new(
        name: impl Into<String>,
        positions: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Nova3dResult<Self> {
        let name = name.into();

        if positions.is_empty() {
            client_bail!("nova3d::Geometry", "Geometry '{}' has no vertices", name);
        }
        if indices.len() % 3 != 0 {
            client_bail!(
                "nova3d::Geometry",
                "Geometry '{}' index count {} is not a multiple of 3",
                name,
                indices.len()
            );
        }
        if let Some(&bad) = indices.iter().find(|&&index| index as usize >= positions.len()) {
            client_bail!(
                "nova3d::Geometry",
                "Geometry '{}' index {} out of range (vertex count = {})",
                name,
                bad,
                positions.len()
            );
        }

        Ok(Self { name, positions, indices })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl CollectionRow for GeometryDef {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
