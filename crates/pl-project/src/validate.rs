//! Project validation logic.

use crate::schema::Project;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    unique_ids(project.lines.iter().map(|l| l.id.as_str()), "lines")?;
    unique_ids(
        project.transformers.iter().map(|t| t.id.as_str()),
        "transformers",
    )?;
    unique_ids(project.generators.iter().map(|g| g.id.as_str()), "generators")?;
    unique_ids(
        project.network_lines.iter().map(|l| l.disp_name.as_str()),
        "network_lines",
    )?;

    let mut book_ids = HashSet::new();
    for book in &project.books {
        if !book_ids.insert(book.id) {
            return Err(ValidationError::DuplicateId {
                id: book.id.to_string(),
                context: "books".to_string(),
            });
        }
    }

    Ok(())
}

fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    context: &str,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: context.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId {
                id: id.to_string(),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BookDef, GeneratorDef, NetworkLineDef, NetworkLineKindDef};

    fn empty() -> Project {
        Project {
            version: 1,
            name: "test".to_string(),
            lines: vec![],
            transformers: vec![],
            generators: vec![],
            network_lines: vec![],
            books: vec![],
        }
    }

    fn generator(id: &str) -> GeneratorDef {
        GeneratorDef {
            id: id.to_string(),
            u_nom_kv: 10.5,
            p_mw: 50.0,
            tg_phi: 0.5,
            motor: None,
        }
    }

    #[test]
    fn empty_project_is_valid() {
        validate_project(&empty()).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut project = empty();
        project.version = 99;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn duplicate_generator_ids() {
        let mut project = empty();
        project.generators = vec![generator("g1"), generator("g1")];
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("generators"));
    }

    #[test]
    fn blank_id_rejected() {
        let mut project = empty();
        project.generators = vec![generator("  ")];
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::EmptyId { .. })
        ));
    }

    #[test]
    fn duplicate_line_names_and_books() {
        let mut project = empty();
        let line = NetworkLineDef {
            disp_name: "ВЛ-110".to_string(),
            length_km: 10.0,
            u_nom_kv: 110.0,
            kind: NetworkLineKindDef::Base,
            parallel_circuits: None,
        };
        project.network_lines = vec![line.clone(), line];
        assert!(validate_project(&project).is_err());

        let mut project = empty();
        let book = BookDef {
            id: 1,
            name: "a".to_string(),
            pages: 10,
        };
        project.books = vec![book.clone(), book];
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("books"));
    }
}
