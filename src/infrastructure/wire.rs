// SPDX-License-Identifier: MPL-2.0
//! JSON form of the screen list as published by a report.

use crate::application::port::FetchError;
use crate::domain::screen::{ExistingState, NewScreenState, ScreenList, ScreenRecord};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScreenDto {
    image_name: String,
    #[serde(default)]
    new_screen: Option<String>,
    #[serde(default)]
    existing: Option<String>,
    #[serde(default)]
    approved_image: bool,
    #[serde(default)]
    build_image: bool,
    #[serde(default)]
    approved: bool,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Reports publish either a bare array or an object wrapping it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListDto {
    Bare(Vec<ScreenDto>),
    Wrapped {
        #[serde(alias = "screenData")]
        screens: Vec<ScreenDto>,
    },
}

impl From<ScreenDto> for ScreenRecord {
    fn from(dto: ScreenDto) -> Self {
        let extra = dto
            .extra
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                _ => None,
            })
            .collect();

        Self {
            image_name: dto.image_name,
            new_screen: dto
                .new_screen
                .as_deref()
                .map_or(NewScreenState::None, NewScreenState::from_wire),
            existing: dto
                .existing
                .as_deref()
                .map_or(ExistingState::None, ExistingState::from_wire),
            approved_image: dto.approved_image,
            build_image: dto.build_image,
            approved: dto.approved,
            extra,
            ..Self::default()
        }
    }
}

/// Parses a screen list, keeping the published order.
pub fn parse_screen_list(bytes: &[u8]) -> Result<ScreenList, FetchError> {
    let dto: ListDto =
        serde_json::from_slice(bytes).map_err(|e| FetchError::InvalidList(e.to_string()))?;
    let screens = match dto {
        ListDto::Bare(screens) | ListDto::Wrapped { screens } => screens,
    };
    Ok(ScreenList::new(
        screens.into_iter().map(ScreenRecord::from).collect(),
    ))
}

/// Sets `approved` on the named screen of a published list.
///
/// The rest of the document is kept as is. Returns `None` when no screen
/// has that name.
pub fn mark_approved(bytes: &[u8], image_name: &str) -> Result<Option<Vec<u8>>, FetchError> {
    let mut doc: Value =
        serde_json::from_slice(bytes).map_err(|e| FetchError::InvalidList(e.to_string()))?;
    let screens = match &mut doc {
        Value::Array(screens) => screens,
        Value::Object(wrapper) => {
            let key = if wrapper.contains_key("screens") {
                "screens"
            } else {
                "screenData"
            };
            match wrapper.get_mut(key) {
                Some(Value::Array(screens)) => screens,
                _ => return Err(FetchError::InvalidList("no screen array".to_string())),
            }
        }
        _ => return Err(FetchError::InvalidList("no screen array".to_string())),
    };

    let Some(screen) = screens
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|screen| screen.get("imageName").and_then(Value::as_str) == Some(image_name))
    else {
        return Ok(None);
    };
    screen.insert("approved".to_string(), Value::Bool(true));

    serde_json::to_vec_pretty(&doc)
        .map(Some)
        .map_err(|e| FetchError::InvalidList(e.to_string()))
}
