use pl_project::schema::*;
use pl_project::{load, load_json, load_yaml, save_json, save_yaml, validate_project};

fn sample_project() -> Project {
    Project {
        version: 1,
        name: "Round trip".to_string(),
        lines: vec![LineDef {
            id: "l1".to_string(),
            r_ohm_per_km: 0.01,
            x_ohm_per_km: 0.03,
            b_us_per_km: 3.25,
            length_km: 100.0,
            parallel_circuits: Some(2),
            compensation_ohm: Some(-1.0),
        }],
        transformers: vec![TransformerDef {
            id: "t1".to_string(),
            r_ohm: 2.0,
            x_ohm: 20.0,
            b_us: -15.0,
            u_hv_kv: 110.0,
            u_lv_kv: 10.0,
            refer_to_low_side: false,
            tap: None,
        }],
        generators: vec![],
        network_lines: vec![NetworkLineDef {
            disp_name: "КЛ-220 Василеостровская-Северная".to_string(),
            length_km: 4.8,
            u_nom_kv: 220.0,
            kind: NetworkLineKindDef::Cable {
                z: ComplexDef { re: 0.1, im: 0.1 },
                y: ComplexDef { re: 0.05, im: 0.05 },
                insulator: "XLPE".to_string(),
            },
            parallel_circuits: None,
        }],
        books: vec![BookDef {
            id: 1,
            name: "test_name_1".to_string(),
            pages: 200,
        }],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        lines: vec![],
        transformers: vec![],
        generators: vec![],
        network_lines: vec![],
        books: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("pl_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_full_project() {
    let project = sample_project();

    let path = std::env::temp_dir().join("pl_project_roundtrip_full.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_full_project() {
    let project = sample_project();

    let path = std::env::temp_dir().join("pl_project_roundtrip_full.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(project, loaded);

    let by_extension = load(&path).unwrap();
    assert_eq!(project, by_extension);
}

#[test]
fn invalid_project_not_saved() {
    let mut project = sample_project();
    project.version = 7;

    let path = std::env::temp_dir().join("pl_project_invalid.yaml");
    assert!(save_yaml(&path, &project).is_err());
}

#[test]
fn minimal_yaml_uses_defaults() {
    let yaml = r#"
version: 1
name: Minimal
network_lines:
  - disp_name: ВЛ-110 Сортавала
    length_km: 50
    u_nom_kv: 110
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    assert!(project.books.is_empty());
    assert_eq!(project.network_lines[0].kind, NetworkLineKindDef::Base);
    assert_eq!(project.network_lines[0].parallel_circuits, None);
}

#[test]
fn wrong_field_type_is_a_parse_error() {
    let yaml = r#"
version: 1
name: Broken
books:
  - { id: 1, name: a, pages: many }
"#;
    assert!(serde_yaml::from_str::<Project>(yaml).is_err());
}
