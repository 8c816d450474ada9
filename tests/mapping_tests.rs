//! Integration tests for property mapping, quirk correction and defaults.

use std::collections::HashMap;

use matconv::mapping::{DefaultResolver, PropertyMapper};
use matconv::material::{MaterialRecord, TextureRef, Value};
use matconv::rules::{RuleTable, TargetKind};
use matconv::util::rgba;

fn resolver() -> HashMap<String, String> {
    HashMap::from([
        ("a1".to_string(), "Textures/Water_Normal.png".to_string()),
        ("b2".to_string(), "Textures/Foam.png".to_string()),
    ])
}

#[test]
fn test_water_material_end_to_end() {
    let rules = RuleTable::builtin();
    let mapper = PropertyMapper::new(&rules);
    let defaults = DefaultResolver::new(&rules);

    let record = MaterialRecord::new("Water_River_01", "unknown")
        .with_texture("_Water_Normal_Texture", TextureRef::new("a1"))
        .with_texture("_Foam_Texture", TextureRef::new("b2"))
        .with_number("_Enable_Caustics", 1.0)
        .with_number("_Enable_Shore_Foam", 0.0)
        .with_number("_Smoothness", 0.0)
        .with_color("_Water_Deep_Color", rgba(0.0, 0.15, 0.35, 0.0))
        .with_color("_Foam_Color", rgba(1.0, 1.0, 1.0, 0.6));

    let mapped = mapper.map(&record, TargetKind::Liquid, &resolver());
    let mapped = defaults.apply_defaults(mapped, TargetKind::Liquid);

    assert_eq!(mapped.kind, TargetKind::Liquid);
    assert_eq!(mapped.booleans.get("enable_caustics"), Some(&true));
    assert_eq!(mapped.booleans.get("enable_shore_foam"), Some(&false));
    assert!(!mapped.numbers.contains_key("enable_caustics"));

    // Explicit zero beats the 0.95 default.
    assert_eq!(mapped.numbers["smoothness"], 0.0);
    assert_eq!(mapped.numbers["metallic"], 0.0);

    assert_eq!(mapped.colors["deep_color"], rgba(0.0, 0.15, 0.35, 1.0));
    assert_eq!(mapped.colors["foam_color"].w, 0.6);
    assert_eq!(mapped.textures.len(), 2);
    assert!(mapped.textures.values().all(|f| f.starts_with("Textures/")));
}

#[test]
fn test_alpha_fix_is_per_property() {
    let rules = RuleTable::builtin();
    let mapper = PropertyMapper::new(&rules);
    // `_Fog_Color` keeps zero alpha, `_Color` does not.
    let record = MaterialRecord::new("Clouds", "unknown")
        .with_color("_Fog_Color", rgba(0.7, 0.7, 0.8, 0.0))
        .with_color("_Color", rgba(0.7, 0.7, 0.8, 0.0));
    let mapped = mapper.map(&record, TargetKind::Atmosphere, &());
    assert_eq!(mapped.colors["color_tint"].w, 1.0);
    for (name, color) in &mapped.colors {
        if name != "color_tint" {
            assert_eq!(color.w, 0.0, "{name}");
        }
    }
}

#[test]
fn test_same_record_maps_differently_per_kind() {
    let rules = RuleTable::builtin();
    let mapper = PropertyMapper::new(&rules);
    let record = MaterialRecord::new("Ambiguous", "unknown")
        .with_texture("_MainTex", TextureRef::new("a1"));
    let base = mapper.map(&record, TargetKind::Base, &resolver());
    let liquid = mapper.map(&record, TargetKind::Liquid, &resolver());
    assert!(base.textures.contains_key("base_texture"));
    assert!(liquid.textures.contains_key("normal_texture"));
}

#[test]
fn test_defaults_idempotent_for_every_kind() {
    let rules = RuleTable::builtin();
    let mapper = PropertyMapper::new(&rules);
    let defaults = DefaultResolver::new(&rules);
    let record = MaterialRecord::new("Empty", "unknown");
    for kind in TargetKind::ALL {
        let once = defaults.apply_defaults(mapper.map(&record, kind, &()), kind);
        let twice = defaults.apply_defaults(once.clone(), kind);
        assert_eq!(once, twice, "{kind}");
        for (name, value) in rules.defaults(kind) {
            assert_eq!(once.value(name), Some(*value), "{kind} {name}");
        }
    }
}

#[test]
fn test_explicit_false_survives_defaults() {
    let rules = RuleTable::builtin();
    let defaults = DefaultResolver::new(&rules);
    let mut mapped = matconv::material::MappedMaterial::new("Crystal", TargetKind::Refractive);
    mapped.insert_value("enable_fresnel", Value::Bool(false));
    let placeholder = defaults.apply_placeholder_defaults(mapped, TargetKind::Refractive);
    assert!(!placeholder.booleans["enable_fresnel"]);
}
