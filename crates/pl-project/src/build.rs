//! Turning a validated project into domain models.

use pl_components::{Generator, ParallelCircuits, Transformer, TransmissionLine};
use pl_core::ModelResult;
use pl_library::{Book, BookId, Library};
use pl_lines::NetworkLine;
use tracing::debug;

use crate::schema::{
    GeneratorDef, LineDef, NetworkLineDef, NetworkLineKindDef, Project, TransformerDef,
};
use crate::validate::validate_project;
use crate::{ProjectError, ProjectResult};

/// A model together with the project id it was declared under.
#[derive(Debug, Clone, PartialEq)]
pub struct Named<T> {
    pub id: String,
    pub model: T,
}

/// Every model declared in a project, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectModels {
    pub lines: Vec<Named<TransmissionLine>>,
    pub transformers: Vec<Named<Transformer>>,
    pub generators: Vec<Named<Generator>>,
    pub network_lines: Vec<NetworkLine>,
    pub library: Library,
}

/// Validate the project, construct every model and apply the operations its
/// definitions request. The first failure aborts the whole build.
pub fn build(project: &Project) -> ProjectResult<ProjectModels> {
    validate_project(project)?;

    let lines = project
        .lines
        .iter()
        .map(|def| named(&def.id, build_line(def)))
        .collect::<ProjectResult<Vec<_>>>()?;
    let transformers = project
        .transformers
        .iter()
        .map(|def| named(&def.id, build_transformer(def)))
        .collect::<ProjectResult<Vec<_>>>()?;
    let generators = project
        .generators
        .iter()
        .map(|def| named(&def.id, build_generator(def)))
        .collect::<ProjectResult<Vec<_>>>()?;
    let network_lines = project
        .network_lines
        .iter()
        .map(|def| {
            build_network_line(def).map_err(|source| ProjectError::Model {
                id: def.disp_name.clone(),
                source,
            })
        })
        .collect::<ProjectResult<Vec<_>>>()?;

    let books = project
        .books
        .iter()
        .map(|def| Book::new(BookId(def.id), def.name.clone(), def.pages))
        .collect::<ModelResult<Vec<_>>>()
        .map_err(|source| ProjectError::Model {
            id: "books".to_string(),
            source,
        })?;
    let library = Library::with_books(books)?;

    debug!(
        project = %project.name,
        lines = lines.len(),
        transformers = transformers.len(),
        generators = generators.len(),
        network_lines = network_lines.len(),
        books = library.len(),
        "project built"
    );

    Ok(ProjectModels {
        lines,
        transformers,
        generators,
        network_lines,
        library,
    })
}

fn named<T>(id: &str, model: ModelResult<T>) -> ProjectResult<Named<T>> {
    match model {
        Ok(model) => Ok(Named {
            id: id.to_string(),
            model,
        }),
        Err(source) => Err(ProjectError::Model {
            id: id.to_string(),
            source,
        }),
    }
}

fn build_line(def: &LineDef) -> ModelResult<TransmissionLine> {
    let mut line = TransmissionLine::new(
        def.r_ohm_per_km,
        def.x_ohm_per_km,
        def.b_us_per_km,
        def.length_km,
    )?;
    if let Some(n) = def.parallel_circuits {
        line.add_parallel_lines(n)?;
    }
    if let Some(x_comp) = def.compensation_ohm {
        line.line_compensation(x_comp)?;
    }
    Ok(line)
}

fn build_transformer(def: &TransformerDef) -> ModelResult<Transformer> {
    let mut trans = Transformer::new(def.r_ohm, def.x_ohm, def.b_us, def.u_hv_kv, def.u_lv_kv)?;
    if def.refer_to_low_side {
        trans.bring_to_low_voltage();
    }
    if let Some(tap) = def.tap {
        trans.soldering_changing(tap.position, tap.step_percent)?;
    }
    Ok(trans)
}

fn build_generator(def: &GeneratorDef) -> ModelResult<Generator> {
    let mut generator = Generator::new(def.u_nom_kv, def.p_mw, def.tg_phi)?;
    if let Some(motor) = def.motor {
        generator.motor_mode_switching(motor.p_mw, motor.q_mvar)?;
    }
    Ok(generator)
}

fn build_network_line(def: &NetworkLineDef) -> ModelResult<NetworkLine> {
    let mut line = match &def.kind {
        NetworkLineKindDef::Base => NetworkLine::new(&def.disp_name, def.length_km, def.u_nom_kv)?,
        NetworkLineKindDef::Overhead { z, y } => NetworkLine::overhead(
            &def.disp_name,
            def.length_km,
            def.u_nom_kv,
            (*z).into(),
            (*y).into(),
        )?,
        NetworkLineKindDef::Cable { z, y, insulator } => NetworkLine::cable(
            &def.disp_name,
            def.length_km,
            def.u_nom_kv,
            (*z).into(),
            (*y).into(),
            insulator,
        )?,
    };
    if let Some(n) = def.parallel_circuits {
        line.add_parallel_lines(n)?;
    }
    Ok(line)
}
