static DEFAULT_BASE_URL: &str = "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url<IS>(base_url: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_player(&self, player_name: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("player", player_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
