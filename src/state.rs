use std::sync::Arc;

use crate::configs::settings::ServerSettings;
use crate::shell::Shell;

#[derive(Clone)]
pub struct ApplicationState {
    pub client: reqwest::Client,
    pub upstream: Arc<str>,
    pub shell: Arc<Shell>,
}

pub fn new_application_state(settings: &ServerSettings) -> Result<ApplicationState, reqwest::Error> {
    // Upstream redirects are relayed, not followed. No timeout at this layer.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(ApplicationState {
        client,
        upstream: Arc::from(settings.upstream.trim_end_matches('/')),
        shell: Arc::new(Shell::load(&settings.browser_dist)),
    })
}
