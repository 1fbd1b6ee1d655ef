// sondeo-core/src/infrastructure/xlsx.rs
//
// rust_xlsxwriter adapter for the FormWriter port: three worksheets, bold
// header row, frozen header pane, column widths derived from the header
// titles.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, Workbook};
use tracing::info;

use crate::domain::form::{Settings, XlsForm, SURVEY_COLUMNS};
use crate::error::SondeoError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::writer::FormWriter;

#[derive(Debug, Default)]
pub struct XlsxFormWriter;

impl XlsxFormWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_sheet(
        workbook: &mut Workbook,
        name: &str,
        header: &[&str],
        rows: &[Vec<&str>],
    ) -> Result<(), InfrastructureError> {
        let header_format = Format::new().set_bold().set_background_color(Color::Orange);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        worksheet.write_row_with_format(0, 0, header.iter().copied(), &header_format)?;
        for (index, row) in rows.iter().enumerate() {
            worksheet.write_row(index as u32 + 1, 0, row.iter().copied())?;
        }

        worksheet.set_freeze_panes(1, 0)?;
        for (col, title) in header.iter().enumerate() {
            let width = (title.len() + 10).clamp(14, 90);
            worksheet.set_column_width(col as u16, width as f64)?;
        }
        Ok(())
    }
}

impl FormWriter for XlsxFormWriter {
    fn write(&self, form: &XlsForm, dest: &Path) -> Result<PathBuf, SondeoError> {
        let target = if dest.is_dir() {
            dest.join(form.default_file_name())
        } else {
            dest.to_path_buf()
        };

        let mut workbook = Workbook::new();

        let survey_rows: Vec<Vec<&str>> = form.survey.iter().map(|r| r.cells().to_vec()).collect();
        Self::write_sheet(&mut workbook, "survey", &SURVEY_COLUMNS, &survey_rows)?;

        let choice_columns = form.choice_columns();
        let choices_rows: Vec<Vec<&str>> =
            form.choices.iter().map(|r| form.choice_cells(r)).collect();
        Self::write_sheet(&mut workbook, "choices", &choice_columns, &choices_rows)?;

        Self::write_sheet(
            &mut workbook,
            "settings",
            &Settings::COLUMNS,
            &[form.settings.cells().to_vec()],
        )?;

        workbook.save(&target).map_err(InfrastructureError::Xlsx)?;
        info!(path = ?target, rows = form.survey.len(), "XLSForm written");
        Ok(target)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::catalog::ChoiceRow;
    use crate::domain::form::SurveyRow;
    use tempfile::tempdir;

    fn small_form() -> XlsForm {
        XlsForm {
            survey: vec![
                SurveyRow::begin_group("p1_intro", "Introducción"),
                SurveyRow::note("p1_texto", "Texto"),
                SurveyRow::end_group("p1_end"),
            ],
            choices: vec![ChoiceRow::new("yesno", "Sí"), ChoiceRow::new("yesno", "No")],
            settings: Settings {
                form_title: "Encuesta comercio – Prueba".into(),
                version: "202601".into(),
                default_language: "es".into(),
                style: "pages".into(),
            },
        }
    }

    #[test]
    fn test_writes_workbook_to_explicit_path() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("form.xlsx");

        let written = XlsxFormWriter::new().write(&small_form(), &dest).unwrap();
        assert_eq!(written, dest);

        // xlsx is a zip container.
        let bytes = std::fs::read(&written).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_directory_destination_gets_default_name() {
        let dir = tempdir().unwrap();
        let written = XlsxFormWriter::new()
            .write(&small_form(), dir.path())
            .unwrap();
        assert_eq!(
            written.file_name().unwrap().to_string_lossy(),
            "encuesta_comercio_prueba_xlsform.xlsx"
        );
    }
}
