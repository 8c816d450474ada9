//! Group keys derived from mesh names.
//!
//! Detail levels carry a trailing `_LOD<n>` suffix (any case). The key is
//! the name with that suffix removed; `LOD0` or no suffix marks the
//! reference member.

const LOD_TAG: &str = "_lod";

/// Split off a trailing `_LOD<n>` suffix, returning the stem and `n`.
fn split_lod(mesh_name: &str) -> Option<(&str, u32)> {
    let lowered = mesh_name.to_ascii_lowercase();
    let pos = lowered.rfind(LOD_TAG)?;
    let digits = &mesh_name[pos + LOD_TAG.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Any all-digit suffix is a detail level; oversized ones sort last.
    let level = digits.parse().unwrap_or(u32::MAX);
    Some((&mesh_name[..pos], level))
}

/// Consistency-cache key for a mesh.
pub fn group_key_for_mesh(mesh_name: &str) -> &str {
    split_lod(mesh_name).map_or(mesh_name, |(stem, _)| stem)
}

/// Detail level of a mesh; 0 when the name has no suffix.
pub fn lod_level(mesh_name: &str) -> u32 {
    split_lod(mesh_name).map_or(0, |(_, level)| level)
}

/// True for the member whose decision the rest of its group inherits.
pub fn is_reference_mesh(mesh_name: &str) -> bool {
    lod_level(mesh_name) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key() {
        assert_eq!(group_key_for_mesh("SM_Env_Tree_01_LOD0"), "SM_Env_Tree_01");
        assert_eq!(group_key_for_mesh("SM_Env_Tree_01_LOD2"), "SM_Env_Tree_01");
        assert_eq!(group_key_for_mesh("SM_Env_Tree_01_lod1"), "SM_Env_Tree_01");
        assert_eq!(group_key_for_mesh("SM_Env_Tree_01"), "SM_Env_Tree_01");
    }

    #[test]
    fn test_suffix_must_be_numeric_and_trailing() {
        assert_eq!(group_key_for_mesh("Rock_LODx"), "Rock_LODx");
        assert_eq!(group_key_for_mesh("Rock_LOD"), "Rock_LOD");
        assert_eq!(group_key_for_mesh("Rock_LOD1_Broken"), "Rock_LOD1_Broken");
    }

    #[test]
    fn test_reference_member() {
        assert!(is_reference_mesh("Tree_LOD0"));
        assert!(is_reference_mesh("Tree"));
        assert!(!is_reference_mesh("Tree_LOD3"));
        assert_eq!(lod_level("Tree_LOD12"), 12);
    }

    #[test]
    fn test_oversized_lod_number() {
        assert_eq!(group_key_for_mesh("Tree_LOD99999999999"), "Tree");
        assert!(!is_reference_mesh("Tree_LOD99999999999"));
        assert_eq!(lod_level("Tree_LOD99999999999"), u32::MAX);
    }
}
