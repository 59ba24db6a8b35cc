use crate::db::exports::ExportFile;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Builds the workbook for the dashboard's "export selected files" button.
pub fn export_files_xlsx(files: &[ExportFile]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["Name", "Path", "Size", "Modified"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, file) in files.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &file.name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write name: {}", e)))?;

        worksheet
            .write_string(r, 1, &file.path)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write path: {}", e)))?;

        worksheet
            .write_string(r, 2, &file.size_label)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write size: {}", e)))?;

        worksheet
            .write_string(r, 3, file.modified_on.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
