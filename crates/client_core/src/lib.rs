use anyhow::Result;
use reqwest::Client;
use shared::{
    blend::{combine_colors, BlendMode, Rgb, NEUTRAL_HEX},
    domain::{SelectedColor, SelectedColorId, WheelEntry, WheelEntryId},
    protocol::AddColorRequest,
};
use tracing::{error, warn};

/// Thin wrapper over the remote store's REST surface. One method per
/// endpoint; no retries, no timeouts, no local state.
pub struct PaletteClient {
    http: Client,
    api_url: String,
}

impl PaletteClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            http: Client::new(),
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn list_selected(&self) -> Result<Vec<SelectedColor>> {
        let colors = self
            .http
            .get(format!("{}/api/selected-colors/", self.api_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(colors)
    }

    pub async fn add_selected(&self, hex: &str) -> Result<SelectedColor> {
        let color = self
            .http
            .post(format!("{}/api/selected-colors/", self.api_url))
            .json(&AddColorRequest::new(hex))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(color)
    }

    pub async fn remove_selected(&self, id: SelectedColorId) -> Result<()> {
        self.http
            .delete(format!("{}/api/selected-colors/{}", self.api_url, id.0))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn clear_selected(&self) -> Result<()> {
        self.http
            .delete(format!("{}/api/selected-colors/", self.api_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn list_wheel(&self) -> Result<Vec<WheelEntry>> {
        let entries = self
            .http
            .get(format!("{}/api/color-wheel/", self.api_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(entries)
    }

    pub async fn add_wheel(&self, hex: &str) -> Result<WheelEntry> {
        let entry = self
            .http
            .post(format!("{}/api/color-wheel/", self.api_url))
            .json(&AddColorRequest::new(hex))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(entry)
    }

    pub async fn remove_wheel(&self, id: WheelEntryId) -> Result<()> {
        self.http
            .delete(format!("{}/api/color-wheel/{}", self.api_url, id.0))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// In-memory mirror of the two color lists plus the derived combined color.
///
/// Every mutation goes to the store first; local state changes only after a
/// successful response. Failures are logged and swallowed, leaving state
/// exactly as it was. The combined color is recomputed after every change to
/// the selected list.
pub struct PaletteBoard {
    client: PaletteClient,
    blend_mode: BlendMode,
    selected: Vec<SelectedColor>,
    wheel: Vec<WheelEntry>,
    combined: String,
}

impl PaletteBoard {
    pub fn new(client: PaletteClient, blend_mode: BlendMode) -> Self {
        Self {
            client,
            blend_mode,
            selected: Vec::new(),
            wheel: Vec::new(),
            combined: NEUTRAL_HEX.to_string(),
        }
    }

    pub fn selected(&self) -> &[SelectedColor] {
        &self.selected
    }

    pub fn wheel(&self) -> &[WheelEntry] {
        &self.wheel
    }

    /// The current combined color, `#rrggbb`. [`NEUTRAL_HEX`] when nothing
    /// is selected.
    pub fn combined_hex(&self) -> &str {
        &self.combined
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.blend_mode = blend_mode;
        self.recombine();
    }

    /// Fetches both lists from the store. Either fetch may fail
    /// independently; a failed fetch keeps the previous list.
    pub async fn refresh(&mut self) {
        match self.client.list_selected().await {
            Ok(colors) => {
                self.selected = colors;
                self.recombine();
            }
            Err(err) => error!(error = %err, "failed to fetch selected colors"),
        }
        match self.client.list_wheel().await {
            Ok(entries) => self.wheel = entries,
            Err(err) => error!(error = %err, "failed to fetch color wheel"),
        }
    }

    /// Adds a user-picked color to the selected list.
    pub async fn add_custom(&mut self, hex: &str) -> Option<SelectedColorId> {
        if let Err(err) = Rgb::parse(hex) {
            warn!(error = %err, "rejecting custom color");
            return None;
        }
        self.add_selected_hex(hex).await
    }

    /// Copies a wheel entry into the selected list. The wheel keeps its
    /// entry; only an explicit remove ever deletes one.
    pub async fn pick_from_wheel(&mut self, id: WheelEntryId) -> Option<SelectedColorId> {
        let Some(hex) = self.wheel.iter().find(|e| e.id == id).map(|e| e.hex.clone()) else {
            warn!(wheel_entry_id = id.0, "pick ignored: no such wheel entry");
            return None;
        };
        self.add_selected_hex(&hex).await
    }

    /// Copies a selected color back onto the wheel, leaving it selected.
    pub async fn stash_in_wheel(&mut self, id: SelectedColorId) -> Option<WheelEntryId> {
        let Some(hex) = self
            .selected
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.hex.clone())
        else {
            warn!(selected_color_id = id.0, "stash ignored: no such selected color");
            return None;
        };
        self.add_wheel_hex(&hex).await
    }

    /// Pushes the current combined color onto the wheel.
    pub async fn push_combined(&mut self) -> Option<WheelEntryId> {
        let hex = self.combined.clone();
        self.add_wheel_hex(&hex).await
    }

    pub async fn remove_selected(&mut self, id: SelectedColorId) -> bool {
        if !self.selected.iter().any(|c| c.id == id) {
            warn!(selected_color_id = id.0, "remove ignored: no such selected color");
            return false;
        }
        match self.client.remove_selected(id).await {
            Ok(()) => {
                self.selected.retain(|c| c.id != id);
                self.recombine();
                true
            }
            Err(err) => {
                error!(error = %err, selected_color_id = id.0, "failed to remove selected color");
                false
            }
        }
    }

    pub async fn remove_wheel_entry(&mut self, id: WheelEntryId) -> bool {
        match self.wheel.iter().find(|e| e.id == id) {
            None => {
                warn!(wheel_entry_id = id.0, "remove ignored: no such wheel entry");
                return false;
            }
            Some(entry) if !entry.removable => {
                warn!(wheel_entry_id = id.0, "remove ignored: entry is not removable");
                return false;
            }
            Some(_) => {}
        }
        match self.client.remove_wheel(id).await {
            Ok(()) => {
                self.wheel.retain(|e| e.id != id);
                true
            }
            Err(err) => {
                error!(error = %err, wheel_entry_id = id.0, "failed to remove wheel entry");
                false
            }
        }
    }

    /// Bulk delete of the whole selected list.
    pub async fn clear_selected(&mut self) -> bool {
        match self.client.clear_selected().await {
            Ok(()) => {
                self.selected.clear();
                self.recombine();
                true
            }
            Err(err) => {
                error!(error = %err, "failed to clear selected colors");
                false
            }
        }
    }

    async fn add_selected_hex(&mut self, hex: &str) -> Option<SelectedColorId> {
        match self.client.add_selected(hex).await {
            Ok(color) => {
                let id = color.id;
                self.selected.push(color);
                self.recombine();
                Some(id)
            }
            Err(err) => {
                error!(error = %err, hex, "failed to add selected color");
                None
            }
        }
    }

    async fn add_wheel_hex(&mut self, hex: &str) -> Option<WheelEntryId> {
        match self.client.add_wheel(hex).await {
            Ok(entry) => {
                let id = entry.id;
                self.wheel.push(entry);
                Some(id)
            }
            Err(err) => {
                error!(error = %err, hex, "failed to add wheel entry");
                None
            }
        }
    }

    fn recombine(&mut self) {
        match combine_colors(self.selected.iter().map(|c| c.hex.as_str()), self.blend_mode) {
            Ok(hex) => self.combined = hex,
            // A stored record broke the 6-digit invariant; keep the previous
            // combined value rather than show garbage.
            Err(err) => error!(error = %err, "combined color left stale"),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
