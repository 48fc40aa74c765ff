// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ball colors, build results, and the status descriptors derived from them.
//!
//! Both lookups are exhaustive matches: adding a color or a result without a
//! status entry is a compile error, and parsing an unknown wire value is a
//! [`StatusError`] rather than a silent default.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing server-side status codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("unknown build result: {0}")]
    UnknownResult(String),

    #[error("unknown ball color: {0}")]
    UnknownColor(String),

    #[error("job {0} has no ball color")]
    MissingColor(String),
}

/// Display descriptor used for the notification header and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Header line shown above the build timestamp
    pub message: &'static str,
    /// Icon base name
    pub color: &'static str,
    /// Build is currently running
    pub building: bool,
}

impl Status {
    const fn new(message: &'static str, color: &'static str, building: bool) -> Self {
        Self { message, color, building }
    }

    /// Icon file stem, e.g. `red` or `red-building`.
    pub fn icon_name(&self) -> String {
        if self.building {
            format!("{}-building", self.color)
        } else {
            self.color.to_string()
        }
    }
}

/// Jenkins "ball color": a job's last status plus whether a build is running.
///
/// The `*Anime` variants are the animated (building) forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BallColor {
    Blue,
    BlueAnime,
    Yellow,
    YellowAnime,
    Red,
    RedAnime,
    Grey,
    GreyAnime,
    Disabled,
    DisabledAnime,
    Aborted,
    AbortedAnime,
    NotBuilt,
    NotBuiltAnime,
}

impl BallColor {
    pub fn status(self) -> Status {
        match self {
            BallColor::Blue => Status::new("Success", "blue", false),
            BallColor::BlueAnime => Status::new("Success", "blue", true),
            BallColor::Yellow => Status::new("Unstable", "yellow", false),
            BallColor::YellowAnime => Status::new("Unstable", "yellow", true),
            BallColor::Red => Status::new("Failure", "red", false),
            BallColor::RedAnime => Status::new("Failure", "red", true),
            BallColor::Grey => Status::new("Pending", "grey", false),
            BallColor::GreyAnime => Status::new("Pending", "grey", true),
            BallColor::Disabled => Status::new("Disabled", "disabled", false),
            BallColor::DisabledAnime => Status::new("Disabled", "disabled", true),
            BallColor::Aborted => Status::new("Aborted", "aborted", false),
            BallColor::AbortedAnime => Status::new("Aborted", "aborted", true),
            BallColor::NotBuilt => Status::new("Not built", "notbuilt", false),
            BallColor::NotBuiltAnime => Status::new("Not built", "notbuilt", true),
        }
    }

    pub fn is_building(self) -> bool {
        self.status().building
    }
}

crate::simple_display! {
    BallColor {
        Blue => "blue",
        BlueAnime => "blue_anime",
        Yellow => "yellow",
        YellowAnime => "yellow_anime",
        Red => "red",
        RedAnime => "red_anime",
        Grey => "grey",
        GreyAnime => "grey_anime",
        Disabled => "disabled",
        DisabledAnime => "disabled_anime",
        Aborted => "aborted",
        AbortedAnime => "aborted_anime",
        NotBuilt => "notbuilt",
        NotBuiltAnime => "notbuilt_anime",
    }
}

impl FromStr for BallColor {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "blue" => BallColor::Blue,
            "blue_anime" => BallColor::BlueAnime,
            "yellow" => BallColor::Yellow,
            "yellow_anime" => BallColor::YellowAnime,
            "red" => BallColor::Red,
            "red_anime" => BallColor::RedAnime,
            "grey" => BallColor::Grey,
            "grey_anime" => BallColor::GreyAnime,
            "disabled" => BallColor::Disabled,
            "disabled_anime" => BallColor::DisabledAnime,
            "aborted" => BallColor::Aborted,
            "aborted_anime" => BallColor::AbortedAnime,
            "notbuilt" => BallColor::NotBuilt,
            "notbuilt_anime" => BallColor::NotBuiltAnime,
            other => return Err(StatusError::UnknownColor(other.to_string())),
        })
    }
}

impl TryFrom<String> for BallColor {
    type Error = StatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BallColor> for String {
    fn from(color: BallColor) -> Self {
        color.to_string()
    }
}

/// Terminal outcome of a build. Absent while the build is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuildResult {
    Success,
    Unstable,
    Failure,
    NotBuilt,
    Aborted,
}

impl BuildResult {
    /// The ball color a finished build with this result settles on.
    pub fn color(self) -> BallColor {
        match self {
            BuildResult::Success => BallColor::Blue,
            BuildResult::Unstable => BallColor::Yellow,
            BuildResult::Failure => BallColor::Red,
            BuildResult::NotBuilt => BallColor::NotBuilt,
            BuildResult::Aborted => BallColor::Aborted,
        }
    }

    pub fn status(self) -> Status {
        self.color().status()
    }
}

crate::simple_display! {
    BuildResult {
        Success => "SUCCESS",
        Unstable => "UNSTABLE",
        Failure => "FAILURE",
        NotBuilt => "NOT_BUILT",
        Aborted => "ABORTED",
    }
}

impl FromStr for BuildResult {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "SUCCESS" => BuildResult::Success,
            "UNSTABLE" => BuildResult::Unstable,
            "FAILURE" => BuildResult::Failure,
            "NOT_BUILT" => BuildResult::NotBuilt,
            "ABORTED" => BuildResult::Aborted,
            other => return Err(StatusError::UnknownResult(other.to_string())),
        })
    }
}

impl TryFrom<String> for BuildResult {
    type Error = StatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BuildResult> for String {
    fn from(result: BuildResult) -> Self {
        result.to_string()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
