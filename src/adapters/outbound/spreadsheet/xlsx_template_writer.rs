use super::package::XlsxPackage;
use super::xml_parts::{
    remove_elements, replace_sheet_data, retarget_pivot_cache, update_workbook, workbook_sheets,
    PivotSource, SheetPart,
};
use crate::config::SheetNames;
use crate::ports::outbound::{GroupSummaryData, SummaryWriter, WrittenSummary};
use crate::shared::error::PipelineError;
use crate::shared::security::{
    sanitize_file_name, validate_file_size, validate_not_symlink, MAX_FILE_SIZE,
};
use crate::shared::Result;
use crate::summary_generation::domain::CsvTable;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Defined name pointing at the PRBS rows
pub const PRBS_SOURCE_NAME: &str = "prbs_source";
/// Defined name pointing at the data-test rows
pub const DATA_SOURCE_NAME: &str = "data_source";

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const CALC_CHAIN_PART: &str = "xl/calcChain.xml";
const PIVOT_CACHE_PREFIX: &str = "xl/pivotCache/pivotCacheDefinition";

/// XlsxTemplateWriter adapter that renders one workbook per group from a template
///
/// The template package is copied part by part. Only the raw-data sheets,
/// the pivot cache definitions reading from them and the workbook part are
/// rewritten, so pivot tables, charts, formats and summary formulas carry
/// over. Each pivot cache over a raw sheet is pointed at the new rows and
/// refreshed when the file is opened; the workbook names `prbs_source` /
/// `data_source` cover the same rows for formulas.
pub struct XlsxTemplateWriter {
    template: PathBuf,
    output_dir: PathBuf,
    sheets: SheetNames,
}

/// One test type's rows and where they go
struct Section<'a> {
    table: &'a CsvTable,
    raw_sheet: &'a str,
    summary_sheet: &'a str,
    source_name: &'static str,
}

impl XlsxTemplateWriter {
    pub fn new(template: PathBuf, output_dir: PathBuf, sheets: SheetNames) -> Self {
        Self {
            template,
            output_dir,
            sheets,
        }
    }

    fn open_template(&self) -> Result<XlsxPackage> {
        if !self.template.is_file() {
            return Err(PipelineError::TemplateNotFound {
                path: self.template.clone(),
            }
            .into());
        }

        let metadata = fs::metadata(&self.template).map_err(|e| PipelineError::FileReadError {
            path: self.template.clone(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), &self.template, MAX_FILE_SIZE)?;

        XlsxPackage::open(&self.template)
    }

    fn template_sheets(&self, package: &XlsxPackage) -> Result<Vec<SheetPart>> {
        let read_part = |name: &str| -> Result<String> {
            package.text(name)?.ok_or_else(|| {
                PipelineError::FileReadError {
                    path: self.template.clone(),
                    details: format!("Not an Excel workbook: missing '{}'", name),
                }
                .into()
            })
        };

        workbook_sheets(&read_part(WORKBOOK_PART)?, &read_part(WORKBOOK_RELS_PART)?)
            .with_context(|| format!("Failed to read the sheet list of {}", self.template.display()))
    }

    fn sections<'a>(&'a self, summary: &'a GroupSummaryData) -> Vec<Section<'a>> {
        let mut sections = Vec::new();
        if let Some(table) = &summary.prbs {
            sections.push(Section {
                table,
                raw_sheet: &self.sheets.raw_prbs,
                summary_sheet: &self.sheets.prbs_summary,
                source_name: PRBS_SOURCE_NAME,
            });
        }
        if let Some(table) = &summary.data {
            sections.push(Section {
                table,
                raw_sheet: &self.sheets.raw_data,
                summary_sheet: &self.sheets.data_summary,
                source_name: DATA_SOURCE_NAME,
            });
        }
        sections
    }

    fn output_path(&self, summary: &GroupSummaryData) -> Result<PathBuf> {
        let file_name = sanitize_file_name(&summary.key.output_file_name());
        let path = self.output_dir.join(file_name);

        fs::create_dir_all(&self.output_dir).map_err(|e| PipelineError::FileWriteError {
            path: self.output_dir.clone(),
            details: format!("Failed to create output directory: {}", e),
        })?;

        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        Ok(path)
    }

    /// Writes the package next to the target and renames it into place
    fn save(&self, package: &XlsxPackage, path: &Path) -> Result<()> {
        let write_error = |details: String| PipelineError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        let mut temp =
            NamedTempFile::new_in(&self.output_dir).map_err(|e| write_error(e.to_string()))?;
        package
            .write_to_file(temp.as_file_mut())
            .map_err(|e| write_error(format!("{:#}", e)))?;
        temp.persist(path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

impl SummaryWriter for XlsxTemplateWriter {
    fn write_summary(&self, summary: &GroupSummaryData) -> Result<WrittenSummary> {
        let mut package = self.open_template()?;
        let sheets = self.template_sheets(&package)?;
        let sections = self.sections(summary);
        let mut warnings = Vec::new();

        let mut raw_parts = Vec::new();
        for section in &sections {
            let part = sheets
                .iter()
                .find(|s| s.name == section.raw_sheet)
                .map(|s| s.part.clone())
                .ok_or_else(|| PipelineError::SheetNotFound {
                    sheet: section.raw_sheet.to_string(),
                    path: self.template.clone(),
                })?;
            raw_parts.push(part);

            if !sheets.iter().any(|s| s.name == section.summary_sheet) {
                warnings.push(format!(
                    "Sheet '{}' not found in template, no summary is built from '{}'",
                    section.summary_sheet, section.raw_sheet
                ));
            }
        }

        for (section, part) in sections.iter().zip(&raw_parts) {
            let xml = package
                .text(part)?
                .with_context(|| format!("Template is missing part '{}'", part))?;
            let updated = replace_sheet_data(&xml, section.table)
                .with_context(|| format!("Failed to write rows to sheet '{}'", section.raw_sheet))?;
            package.set(part, updated.into_bytes());
        }

        let sources: Vec<PivotSource<'_>> = sections
            .iter()
            .map(|section| PivotSource {
                sheet: section.raw_sheet,
                range: section.table.range(),
                defined_name: section.source_name,
            })
            .collect();
        let caches: Vec<String> = package
            .part_names()
            .filter(|name| name.starts_with(PIVOT_CACHE_PREFIX) && name.ends_with(".xml"))
            .map(str::to_string)
            .collect();
        for cache in &caches {
            let Some(xml) = package.text(cache)? else { continue };
            let retargeted = retarget_pivot_cache(&xml, &sources)
                .with_context(|| format!("Failed to update pivot cache '{}'", cache))?;
            if let Some(updated) = retargeted {
                package.set(cache, updated.into_bytes());
            }
        }

        let names: Vec<(&str, String)> = sections
            .iter()
            .map(|section| {
                let reference = format!(
                    "'{}'!{}",
                    section.raw_sheet.replace('\'', "''"),
                    section.table.absolute_range()
                );
                (section.source_name, reference)
            })
            .collect();
        if let Some(workbook) = package.text(WORKBOOK_PART)? {
            let updated = update_workbook(&workbook, &names).context("Failed to update workbook names")?;
            package.set(WORKBOOK_PART, updated.into_bytes());
        }

        // Cleared raw sheets may have held formulas; Excel rebuilds the chain.
        if package.contains(CALC_CHAIN_PART) {
            package.remove(CALC_CHAIN_PART);
            for (part, element, attr) in [
                (CONTENT_TYPES_PART, b"Override".as_slice(), b"PartName".as_slice()),
                (WORKBOOK_RELS_PART, b"Relationship".as_slice(), b"Target".as_slice()),
            ] {
                if let Some(xml) = package.text(part)? {
                    let updated = remove_elements(&xml, element, attr, |v| v.ends_with("calcChain.xml"))?;
                    package.set(part, updated.into_bytes());
                }
            }
        }

        let path = self.output_path(summary)?;
        self.save(&package, &path)?;

        Ok(WrittenSummary { path, warnings })
    }
}
