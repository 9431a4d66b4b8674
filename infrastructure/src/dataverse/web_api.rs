//! Dataverse Web API transport.
//!
//! Queries run as `GET {base}/api/data/{version}/{entitySet}?fetchXml=...`,
//! updates as `PATCH {base}/api/data/{version}/{entitySet}({id})` with
//! `If-Match: *` so an update never creates a row.

use async_trait::async_trait;
use orgsettings_application::ports::dataverse::{
    DataverseTransport, FetchQuery, Row, TransportError,
};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

pub struct DataverseWebApiTransport {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    token: Option<String>,
}

impl DataverseWebApiTransport {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn entity_set_url(&self, entity: &str) -> String {
        format!(
            "{}/api/data/{}/{}",
            self.base_url,
            self.api_version,
            entity_set_name(entity)
        )
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("Accept", "application/json")
            .header("OData-MaxVersion", "4.0")
            .header("OData-Version", "4.0");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = self
            .prepare(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status {
            status: status.as_u16(),
            message: error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string()),
        })
    }
}

#[async_trait]
impl DataverseTransport for DataverseWebApiTransport {
    async fn fetch_query(&self, query: &FetchQuery) -> Result<Vec<Row>, TransportError> {
        let url = self.entity_set_url(&query.entity);
        debug!("GET {} (FetchXML)", url);

        let request = self
            .client
            .get(&url)
            .query(&[("fetchXml", query.fetch_xml.as_str())]);
        let body: Value = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        rows_from_response(body)
    }

    async fn update(&self, entity: &str, id: &str, fields: Row) -> Result<(), TransportError> {
        let url = format!("{}({})", self.entity_set_url(entity), id);
        debug!("PATCH {} ({} fields)", url, fields.len());

        let request = self
            .client
            .patch(&url)
            .header("If-Match", "*")
            .json(&Value::Object(fields));
        self.send(request).await?;
        Ok(())
    }
}

/// Entity set name of a logical entity name (`organization` -> `organizations`).
fn entity_set_name(entity: &str) -> String {
    format!("{}s", entity)
}

/// Extract `error.message` from an OData error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Rows of an OData collection response (`{"value": [...]}`).
fn rows_from_response(body: Value) -> Result<Vec<Row>, TransportError> {
    let Value::Object(mut envelope) = body else {
        return Err(TransportError::Decode("response is not a JSON object".into()));
    };
    let Some(Value::Array(items)) = envelope.remove("value") else {
        return Err(TransportError::Decode("response has no value array".into()));
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            other => Err(TransportError::Decode(format!(
                "expected a row object, found {}",
                other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_server::serve_once;
    use serde_json::json;

    #[test]
    fn test_entity_set_url() {
        let transport = DataverseWebApiTransport::new(
            reqwest::Client::new(),
            "https://contoso.crm.dynamics.com/",
            "v9.2",
        );
        assert_eq!(
            transport.entity_set_url("organization"),
            "https://contoso.crm.dynamics.com/api/data/v9.2/organizations"
        );
    }

    #[test]
    fn test_error_message_from_odata_body() {
        let body = r#"{"error":{"code":"0x80040220","message":"Principal user is missing prvWriteOrganization privilege"}}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Principal user is missing prvWriteOrganization privilege")
        );
        assert!(error_message("<html>Bad Gateway</html>").is_none());
    }

    #[test]
    fn test_rows_from_response() {
        let rows = rows_from_response(json!({
            "@odata.context": "https://contoso.crm.dynamics.com/api/data/v9.2/$metadata#organizations",
            "value": [
                {"organizationid": "5f2a1c9e", "orgdborgsettings": "<OrgSettings/>"}
            ]
        }))
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["organizationid"], "5f2a1c9e");
    }

    #[test]
    fn test_rows_from_unexpected_shape() {
        assert!(matches!(
            rows_from_response(json!([1, 2])),
            Err(TransportError::Decode(_))
        ));
        assert!(matches!(
            rows_from_response(json!({"value": [1]})),
            Err(TransportError::Decode(_))
        ));
    }

    fn transport(base_url: &str) -> DataverseWebApiTransport {
        DataverseWebApiTransport::new(reqwest::Client::new(), base_url, "v9.2").with_token("abc")
    }

    #[tokio::test]
    async fn test_fetch_query_sends_fetch_xml() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"value":[{"organizationid":"5f2a1c9e","orgdborgsettings":null}]}"#,
        )
        .await;
        let query = FetchQuery::new("organization", "<fetch><entity name='organization'/></fetch>");

        let rows = transport(&url).fetch_query(&query).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["organizationid"], "5f2a1c9e");
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/data/v9.2/organizations?fetchXml="));
        assert!(request.to_lowercase().contains("authorization: bearer abc"));
    }

    #[tokio::test]
    async fn test_update_patches_existing_row() {
        let (url, server) = serve_once("204 No Content", "").await;
        let mut fields = Row::new();
        fields.insert(
            "orgdborgsettings".to_string(),
            json!("<orgSettings><MaxFolderDepth>7</MaxFolderDepth></orgSettings>"),
        );

        transport(&url)
            .update("organization", "5f2a1c9e", fields)
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("PATCH /api/data/v9.2/organizations(5f2a1c9e)"));
        assert!(request.to_lowercase().contains("if-match: *"));
        assert!(request.contains("MaxFolderDepth"));
    }

    #[tokio::test]
    async fn test_error_status_carries_odata_message() {
        let (url, server) = serve_once(
            "403 Forbidden",
            r#"{"error":{"code":"0x80040220","message":"Principal user is missing prvWriteOrganization privilege"}}"#,
        )
        .await;

        let err = transport(&url)
            .update("organization", "5f2a1c9e", Row::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TransportError::Status { status: 403, ref message }
                if message == "Principal user is missing prvWriteOrganization privilege"
        ));
        server.await.unwrap();
    }
}
