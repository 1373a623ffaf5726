use std::path::Path;

use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;

use crate::error::DatasetError;
use crate::utilities::dataset::Dataset;

/// Writes the whole table, header row first.
///
/// # Errors
///
/// Returns [`DatasetError::Write`] or [`DatasetError::Csv`] when the file
/// cannot be created or a record cannot be written.
pub async fn write_dataset(dataset: &Dataset, output_path: &Path) -> Result<(), DatasetError> {
    let io_error = |source| DatasetError::Write {
        path: output_path.to_path_buf(),
        source,
    };
    let csv_error = |source| DatasetError::Csv {
        path: output_path.to_path_buf(),
        source,
    };

    let file_out = AsyncFile::create(output_path).await.map_err(io_error)?;
    let mut csv_writer = AsyncWriterBuilder::new()
        .flexible(true)
        .create_writer(file_out);

    csv_writer
        .write_record(dataset.headers())
        .await
        .map_err(csv_error)?;

    for row in dataset.rows() {
        csv_writer.write_record(row).await.map_err(csv_error)?;
    }

    csv_writer.flush().await.map_err(io_error)?;

    tracing::debug!(path = %output_path.display(), rows = dataset.len(), "dataset written");
    Ok(())
}
