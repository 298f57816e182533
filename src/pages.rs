//! Markdown reference pages for JSON Schema documents.
//!
//! Ties the pipeline together: import a schema, generate its documentation
//! with the configured options, render one page with a section per named
//! schema.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, instrument};

use crate::{
    DocGenOptions, DocGenerator, Result, SchemaDocError,
    config::DocsConfig,
    doc::render,
    import::{self, ImportedSchema},
};

/// Generates Markdown reference pages.
#[derive(Debug, Clone, Default)]
pub struct PageGenerator {
    config: DocsConfig,
    title: Option<String>,
    all_definitions: bool,
}

impl PageGenerator {
    /// Page generator using `config`.
    pub fn new(config: DocsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the page heading, overriding configuration and schema titles.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Also documents definitions the root never refers to.
    pub fn with_all_definitions(mut self, all_definitions: bool) -> Self {
        self.all_definitions = all_definitions;
        self
    }

    /// Renders the page for an imported schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaDocError::DocGen` if generation fails.
    pub async fn render(&self, schema: &ImportedSchema) -> Result<String> {
        let generator = DocGenerator::with_options(DocGenOptions::from(&self.config.docgen));

        let root = generator.generate(&schema.root).await?;
        if self.all_definitions {
            for (_, definition) in &schema.definitions {
                generator.generate(definition).await?;
            }
        }

        let title = match &self.title {
            Some(title) => title.clone(),
            None => self.config.output.resolve_title(schema.title.as_deref()),
        };
        let entries = generator.entries();

        info!(
            %title,
            entries = entries.len(),
            computations = generator.computations(),
            "rendered page"
        );

        Ok(render::markdown_page(&title, &root.into_node(), &entries))
    }

    /// Reads a JSON Schema file and renders its page.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a supported JSON
    /// Schema, or generation fails.
    #[instrument(skip(self), fields(schema = %schema_path.display()))]
    pub async fn render_file(&self, schema_path: &Path) -> Result<String> {
        let json =
            fs::read_to_string(schema_path).map_err(|e| SchemaDocError::io(e, schema_path))?;
        let schema = import::import_str(&json)?;

        self.render(&schema).await
    }

    /// Renders the page for a JSON Schema file and writes it to `output`,
    /// creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`render_file`](Self::render_file), or
    /// `SchemaDocError::IoError` if the page cannot be written.
    pub async fn generate_file(&self, schema_path: &Path, output: &Path) -> Result<PathBuf> {
        let page = self.render_file(schema_path).await?;

        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SchemaDocError::io(e, parent))?;
        }
        fs::write(output, page).map_err(|e| SchemaDocError::io(e, output))?;

        info!(output = %output.display(), "generated documentation");
        Ok(output.to_path_buf())
    }
}
