use crate::config::ValidationConfig;
use crate::error::ConnectorError;
use crate::types::ScheduledTemplateModel;

/// Verify every referenced connector identifier against the allow-list.
///
/// Entries with an absent `connectorId` are skipped: an unspecified
/// reference is a presence concern for the constraint validator, not a
/// failed lookup. Entries are checked in source order and the first unknown
/// identifier fails the document, named in the error.
pub fn check_connector_ids(
    model: &ScheduledTemplateModel,
    config: &ValidationConfig,
) -> Result<(), ConnectorError> {
    let connectors = match &model.required_data_connectors {
        Some(connectors) => connectors.as_slice(),
        None => return Ok(()),
    };

    for connector_id in connectors.iter().filter_map(|c| c.connector_id.as_deref()) {
        if !config.is_valid_connector(connector_id) {
            return Err(ConnectorError {
                connector_id: connector_id.to_string(),
            });
        }
    }

    Ok(())
}
