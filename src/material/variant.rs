//! Shader identity classification.

/// Shader identity strings of the stock character shading models.
pub mod shader_names {
    /// Skin shading model; never dyed.
    pub const SKIN: &str = "character/skin";

    /// Hair shading model; never dyed.
    pub const HAIR: &str = "character/hair";

    /// Player outfit shading model.
    pub const OUTFIT: &str = "character/player_outfit";

    /// Base character shading model. Its native slots already use the
    /// unified names.
    pub const CHARACTER: &str = "character/base";

    /// Cloth shading model.
    pub const CLOTH: &str = "character/cloth";

    /// The unified dyeable shader this crate assigns.
    pub const DYED: &str = "character/dyed";
}

/// Which shading model a material's current shader identity denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    Skin,
    Hair,
    Outfit,
    Character,
    Cloth,
    Unknown,
}

impl ShaderVariant {
    /// Exact-match lookup against the known shader identities.
    ///
    /// Anything unrecognized classifies as [`Unknown`](Self::Unknown) and
    /// is left untouched by the pipeline. The unified dyed shader itself is
    /// deliberately not in the table: an already-remapped material falls out
    /// of the dyeable set, which keeps a full pass idempotent.
    pub fn classify(shader_name: &str) -> Self {
        match shader_name {
            shader_names::SKIN => Self::Skin,
            shader_names::HAIR => Self::Hair,
            shader_names::OUTFIT => Self::Outfit,
            shader_names::CHARACTER => Self::Character,
            shader_names::CLOTH => Self::Cloth,
            _ => Self::Unknown,
        }
    }

    /// Whether this variant may be translated onto the unified shader.
    pub fn is_dyeable(self) -> bool {
        matches!(self, Self::Outfit | Self::Character | Self::Cloth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_shaders() {
        assert_eq!(ShaderVariant::classify(shader_names::SKIN), ShaderVariant::Skin);
        assert_eq!(ShaderVariant::classify(shader_names::HAIR), ShaderVariant::Hair);
        assert_eq!(
            ShaderVariant::classify(shader_names::OUTFIT),
            ShaderVariant::Outfit
        );
        assert_eq!(
            ShaderVariant::classify(shader_names::CHARACTER),
            ShaderVariant::Character
        );
        assert_eq!(
            ShaderVariant::classify(shader_names::CLOTH),
            ShaderVariant::Cloth
        );
    }

    #[test]
    fn test_classify_requires_exact_match() {
        assert_eq!(
            ShaderVariant::classify("character/Cloth"),
            ShaderVariant::Unknown
        );
        assert_eq!(ShaderVariant::classify(""), ShaderVariant::Unknown);
        assert_eq!(
            ShaderVariant::classify("terrain/triplanar"),
            ShaderVariant::Unknown
        );
    }

    #[test]
    fn test_dyed_shader_classifies_unknown() {
        assert_eq!(
            ShaderVariant::classify(shader_names::DYED),
            ShaderVariant::Unknown
        );
    }

    #[test]
    fn test_dyeable_set() {
        assert!(ShaderVariant::Outfit.is_dyeable());
        assert!(ShaderVariant::Character.is_dyeable());
        assert!(ShaderVariant::Cloth.is_dyeable());
        assert!(!ShaderVariant::Skin.is_dyeable());
        assert!(!ShaderVariant::Hair.is_dyeable());
        assert!(!ShaderVariant::Unknown.is_dyeable());
    }
}
