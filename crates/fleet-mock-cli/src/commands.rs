use fleet_mock_core::{AppConfig, FetchParams, FetchResponse, MockDataProvider, Result};

/// Rendered command output
pub struct Output {
    pub body: String,
    /// False when the provider answered with an error indicator
    pub success: bool,
}

pub fn fetch(
    config: &AppConfig,
    resource: &str,
    params: &FetchParams,
    pretty: bool,
) -> Result<Output> {
    let provider = MockDataProvider::from_config(config)?;
    let response = provider.fetch(resource, params);
    render(&response, pretty)
}

pub fn get(config: &AppConfig, path: &str, pretty: bool) -> Result<Output> {
    let provider = MockDataProvider::from_config(config)?;
    let response = provider.fetch_path(path);
    render(&response, pretty)
}

pub fn show_config(config: &AppConfig, pretty: bool) -> Result<Output> {
    Ok(Output {
        body: to_string(config, pretty)?,
        success: true,
    })
}

/// One line per module endpoint: `module  endpoint  -> resource`
pub fn modules(config: &AppConfig) -> Output {
    let mut success = true;
    let lines: Vec<String> = config
        .resolve_endpoints()
        .into_iter()
        .map(|(module, endpoint, route)| match route {
            Ok(route) => format!("{module:<8} {endpoint:<28} -> {}", route.resource),
            Err(e) => {
                success = false;
                format!("{module:<8} {endpoint:<28} !! {e}")
            }
        })
        .collect();

    Output {
        body: lines.join("\n"),
        success,
    }
}

fn render(response: &FetchResponse<'_>, pretty: bool) -> Result<Output> {
    Ok(Output {
        body: to_string(response, pretty)?,
        success: !response.is_error(),
    })
}

fn to_string<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(body)
}
