//! Integration tests for run-level conversion.

use std::io::Write;

use matconv::cache::group_key_for_mesh;
use matconv::convert::{ConversionRequest, Converter};
use matconv::detect::{ShaderHint, Tier};
use matconv::material::MaterialRecord;
use matconv::{Config, Error, TargetKind};

use tempfile::NamedTempFile;

#[test]
fn test_lod_group_shares_reference_kind() {
    let converter = Converter::default();
    let meshes = ["SM_Env_Pine_01_LOD0", "SM_Env_Pine_01_LOD1", "SM_Env_Pine_01_LOD2"];
    // Only the reference member carries a telling name.
    let names = ["Pine_Tree_Leaves", "Mat_A", "Mat_B"];

    let requests: Vec<_> = meshes
        .iter()
        .zip(names)
        .rev()
        .map(|(mesh, name)| {
            ConversionRequest::from_record(MaterialRecord::new(name, "unknown")).with_mesh(mesh)
        })
        .collect();

    let out = converter.convert_batch(&requests, &());
    assert!(out.iter().all(|c| c.material.kind == TargetKind::Vegetation));
    assert_eq!(out.iter().filter(|c| c.is_cached()).count(), 2);
    // Inherited decisions are counted once per conversion.
    assert_eq!(converter.stats().cache_hits, 2);
    assert_eq!(
        converter.cache().get(group_key_for_mesh(meshes[0])),
        Some(TargetKind::Vegetation)
    );
}

#[test]
fn test_batch_many_groups() {
    let converter = Converter::default();
    let mut requests = Vec::new();
    for i in 0..64 {
        let name = if i % 2 == 0 { format!("Water_{i}") } else { format!("Rock_{i}") };
        requests.push(
            ConversionRequest::from_record(MaterialRecord::new(name, "unknown"))
                .with_group(format!("group_{}", i / 4), i % 4 == 0),
        );
    }
    let out = converter.convert_batch(&requests, &());
    assert_eq!(out.len(), 64);
    for (i, c) in out.iter().enumerate() {
        // Every group's reference member is a water material.
        assert_eq!(c.material.kind, TargetKind::Liquid, "request {i}");
    }
    let stats = converter.stats();
    assert_eq!(stats.converted, 64);
    assert_eq!(stats.count(TargetKind::Liquid), 64);
    assert_eq!(converter.cache().len(), 16);
}

#[test]
fn test_custom_slot_without_match_is_flagged() {
    let converter = Converter::default();
    let req = ConversionRequest::named("M_Unknown_42").with_hint(ShaderHint::Custom);
    let out = converter.convert(&req, &());
    assert_eq!(out.material.kind, TargetKind::Base);
    assert!(!out.detection.matched);
    assert_eq!(out.detection.tier, Tier::Fallback);
    assert!(out.material.placeholder);

    let stats = converter.stats();
    assert_eq!(stats.unmatched, 1);
    assert!(stats.review.contains("M_Unknown_42"));
}

#[test]
fn test_generic_shader_id_alone_goes_to_review() {
    let converter = Converter::default();
    let record = MaterialRecord::new("SM_Prop_Crate_01", "0730dae39bc73f34796280af9875ce14");
    let out = converter.convert(&ConversionRequest::from_record(record), &());
    assert_eq!(out.material.kind, TargetKind::Base);
    assert!(!out.detection.matched);

    let stats = converter.stats();
    assert_eq!(stats.unmatched, 1);
    assert!(stats.review.contains("SM_Prop_Crate_01"));
}

#[test]
fn test_unmapped_boolean_keeps_capital_split_name() {
    let converter = Converter::default();
    let record = MaterialRecord::new("Rock_Triplanar", "unknown")
        .with_number("_Enable_AO", 1.0)
        .with_number("_Enable_UV_Based", 0.0);
    let out = converter.convert(&ConversionRequest::from_record(record), &());
    assert_eq!(out.material.booleans.get("enable_a_o"), Some(&true));
    assert_eq!(out.material.booleans.get("enable_u_v_based"), Some(&false));
}

#[test]
fn test_generic_slot_is_not_flagged() {
    let converter = Converter::default();
    let req = ConversionRequest::named("M_Unknown_42").with_hint(ShaderHint::Generic);
    let out = converter.convert(&req, &());
    assert!(out.detection.matched);
    assert!(converter.stats().review.is_empty());
}

#[test]
fn test_requests_from_json() {
    let json = r#"[
        {"material_name": "Lake", "record": {"name": "Lake", "shader_ref": "unknown",
            "numbers": {"_Enable_Caustics": 1.0},
            "colors": {"_Deep_Color": [0.0, 0.1, 0.3, 0.0]}},
         "group": {"key": "SM_Lake", "reference": true}},
        {"material_name": "Crystal_Shard", "hint": "custom"}
    ]"#;
    let requests: Vec<ConversionRequest> = serde_json::from_str(json).unwrap();
    let converter = Converter::default();
    let out = converter.convert_batch(&requests, &());
    assert_eq!(out[0].material.kind, TargetKind::Liquid);
    assert!(out[0].material.booleans["enable_caustics"]);
    assert_eq!(out[0].material.colors["deep_color"].w, 1.0);
    assert_eq!(out[1].material.kind, TargetKind::Refractive);

    let emitted = serde_json::to_value(&out[1].material).unwrap();
    assert_eq!(emitted["kind"], "refractive");
    assert_eq!(emitted["placeholder"], true);
}

#[test]
fn test_config_file_drives_converter() -> matconv::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{"extra_identifiers": {{"deadbeefdeadbeefdeadbeefdeadbeef": "atmosphere"}}, "publish_threshold": 40}}"#
    )?;
    let config = Config::load(file.path())?;
    let converter = Converter::with_config(config)?;

    let out = converter.convert(
        &ConversionRequest::from_record(MaterialRecord::new(
            "Rock",
            "deadbeefdeadbeefdeadbeefdeadbeef",
        )),
        &(),
    );
    assert_eq!(out.material.kind, TargetKind::Atmosphere);

    // Single 35-point hit no longer clears the raised threshold.
    let out = converter.convert(&ConversionRequest::from_record(MaterialRecord::new("Glass_01", "x")), &());
    assert_eq!(out.material.kind, TargetKind::Base);
    assert!(!out.detection.matched);
    Ok(())
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config { signature_weight: 0, ..Config::default() };
    assert!(matches!(Converter::with_config(config), Err(Error::InvalidConfig(_))));
}
