use crate::core::deeplink::{program_domain, resolve_fragment};
use crate::core::hierarchy::build_catalog;
use crate::core::loader::DatasetLoader;
use crate::core::normalize::normalize_domain;
use crate::core::projector::project_program;
use crate::domain::model::{
    Catalog, DataOrigin, Dataset, DomainColors, Grade, Palette, RowRecord, Selection, TableOutcome,
};
use crate::domain::ports::{Clock, DatasetSource, Storage};
use crate::utils::error::{LessenError, Result};
use chrono::Local;
use serde::Serialize;

pub const UNKNOWN_TITLE: &str = "Onbekend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready { origin: DataOrigin, records: usize },
    Failed { message: String, retryable: bool },
}

/// Everything the shell needs to fill the detail panel.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub selection: Selection,
    pub fragment: String,
    pub title: String,
    pub description: String,
    pub brochure: Option<String>,
    pub colors: Option<DomainColors>,
    pub table: TableOutcome,
    pub printed_on: String,
}

/// Application context: the loaded rows, the menu built from them and the
/// program currently open.
pub struct Session<S: Storage, D: DatasetSource, K: Clock> {
    loader: DatasetLoader<S, D, K>,
    palette: Palette,
    state: LoadState,
    rows: Vec<RowRecord>,
    catalog: Option<Catalog>,
    current: Option<Selection>,
}

impl<S: Storage, D: DatasetSource, K: Clock> Session<S, D, K> {
    pub fn new(loader: DatasetLoader<S, D, K>, palette: Palette) -> Self {
        Self {
            loader,
            palette,
            state: LoadState::Idle,
            rows: Vec::new(),
            catalog: None,
            current: None,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn colors_for(&self, domain: &str) -> Option<&DomainColors> {
        self.palette.get(&normalize_domain(domain))
    }

    pub async fn start(&mut self) -> Result<()> {
        self.state = LoadState::Loading;
        let outcome = self.loader.load().await;
        self.apply(outcome)
    }

    /// Retry action offered after a failed start.
    pub async fn retry(&mut self) -> Result<()> {
        self.state = LoadState::Loading;
        let outcome = self.loader.retry().await;
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Result<Dataset>) -> Result<()> {
        match outcome {
            Ok(dataset) => {
                self.state = LoadState::Ready {
                    origin: dataset.origin,
                    records: dataset.rows.len(),
                };
                self.catalog = Some(build_catalog(&dataset.rows));
                self.rows = dataset.rows;
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ Loading dataset failed: {}", e);
                self.state = LoadState::Failed {
                    message: e.user_friendly_message(),
                    retryable: e.is_retryable(),
                };
                Err(e)
            }
        }
    }

    fn ensure_loaded(&self) -> Result<()> {
        match self.state {
            LoadState::Ready { .. } => Ok(()),
            _ => Err(LessenError::NotLoadedError),
        }
    }

    pub fn open(&mut self, grade: Grade, slug: &str, domain: &str) -> Result<DetailView> {
        self.ensure_loaded()?;

        let selection = Selection {
            grade,
            slug: slug.to_string(),
            domain: domain.to_string(),
        };
        let table = project_program(&self.rows, grade, slug);

        let (title, description, brochure) = match &table {
            TableOutcome::Table(t) => (
                t.metadata.title.clone(),
                t.metadata.description.clone(),
                t.metadata.brochure.clone(),
            ),
            TableOutcome::NoData => (String::new(), String::new(), None),
        };
        let title = if title.is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            title
        };

        let printed_on = self
            .loader
            .cache()
            .clock()
            .now()
            .with_timezone(&Local)
            .format("%d/%m/%Y")
            .to_string();

        tracing::debug!("Opening {}", selection.fragment());
        let view = DetailView {
            fragment: selection.fragment(),
            colors: self.colors_for(domain).cloned(),
            selection: selection.clone(),
            title,
            description,
            brochure,
            table,
            printed_on,
        };
        self.current = Some(selection);
        Ok(view)
    }

    /// Opens the program a `#<grade>-<slug>` fragment points at. `Ok(None)`
    /// when the fragment is malformed or names no known program.
    pub fn open_fragment(&mut self, fragment: &str) -> Result<Option<DetailView>> {
        self.ensure_loaded()?;

        match resolve_fragment(&self.rows, fragment) {
            Some(selection) => self
                .open(selection.grade, &selection.slug, &selection.domain)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Opens a program picked by grade and slug. A selection without rows
    /// still opens, with an empty domain and no table.
    pub fn open_program(&mut self, grade: Grade, slug: &str) -> Result<DetailView> {
        self.ensure_loaded()?;

        let domain = program_domain(&self.rows, grade, slug).unwrap_or_default();
        self.open(grade, slug, &domain)
    }

    pub fn close(&mut self) {
        self.current = None;
    }
}
