//! Template substitution and the report cycle.

use std::fs;
use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use codebook_diff::{diff, DiffTable};
use codebook_types::CodeEntry;

use crate::error::{ReportError, ReportResult};

/// Fixed relative path the report template is read from.
pub const TEMPLATE_PATH: &str = "./template.html";

/// Fixed relative path the rendered report is written to.
pub const OUTPUT_PATH: &str = "./output.html";

/// Substitute an already-computed change table into a template.
///
/// The table rows are exposed to the template as the list variable `rows`.
/// Substituted values are HTML-escaped.
pub fn render_table(table: &DiffTable, template_src: &str) -> ReportResult<String> {
    let mut context = Context::new();
    context.insert("rows", &table.rows);
    let html = Tera::one_off(template_src, &context, true)?;
    Ok(html)
}

/// Diff two snapshots and render the change table with the given template.
pub fn render(
    before: &[CodeEntry],
    after: &[CodeEntry],
    template_src: &str,
) -> ReportResult<String> {
    render_table(&diff(before, after), template_src)
}

/// Run one full report cycle against the fixed paths.
///
/// Reads the template from [`TEMPLATE_PATH`], diffs the snapshots, renders,
/// and writes the result to [`OUTPUT_PATH`], overwriting any existing file.
/// Rendering completes before the output file is touched, so a failure
/// leaves no partial output behind. Returns the computed table.
pub fn write_report(before: &[CodeEntry], after: &[CodeEntry]) -> ReportResult<DiffTable> {
    write_report_inner(
        Path::new(TEMPLATE_PATH),
        Path::new(OUTPUT_PATH),
        before,
        after,
    )
}

fn write_report_inner(
    template_path: &Path,
    output_path: &Path,
    before: &[CodeEntry],
    after: &[CodeEntry],
) -> ReportResult<DiffTable> {
    let template_src =
        fs::read_to_string(template_path).map_err(|source| ReportError::TemplateRead {
            path: template_path.to_path_buf(),
            source,
        })?;

    let table = diff(before, after);
    let html = render_table(&table, &template_src)?;
    debug!(rows = table.len(), bytes = html.len(), "report rendered");

    fs::write(output_path, html).map_err(|source| ReportError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    })?;
    debug!(path = %output_path.display(), "report written");

    Ok(table)
}
