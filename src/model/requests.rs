/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::error::ValidationError;
use crate::model::form::{FieldValue, RequestOptions};
use crate::model::validation::{check_email, check_recipients, check_required, missing_fields};
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire format of schedule timestamps
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-recipient substitution variables, keyed by recipient address
pub type RecipientVariables = BTreeMap<String, FieldValue>;

/// Options for sending a transactional email
///
/// `from_name`, `from_email`, `subject` and `html_text` are required; an empty
/// string counts as missing. Deserializing from a JSON object with the
/// camelCase option names (`fromName`, `htmlText`, ...) is supported, missing
/// keys default to empty and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendEmailOptions {
    /// Sender display name
    pub from_name: String,
    /// Sender address
    pub from_email: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_text: String,
    /// Reply-to address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Plain-text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    /// Recipient addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,
    /// Substitution variables per recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_variables: Option<RecipientVariables>,
    /// Lists to send to, joined with commas on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    /// Query string appended to tracked links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
    /// Track opens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    /// Track clicks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_clicks: Option<bool>,
    /// Scheduled send time
    #[serde(skip_serializing_if = "Option::is_none", with = "schedule_format")]
    pub schedule_date_time: Option<NaiveDateTime>,
    /// Time zone of `schedule_date_time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_timezone: Option<String>,
}

impl SendEmailOptions {
    /// Creates options with the required fields
    pub fn new(
        from_name: impl Into<String>,
        from_email: impl Into<String>,
        subject: impl Into<String>,
        html_text: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            from_email: from_email.into(),
            subject: subject.into(),
            html_text: html_text.into(),
            ..Default::default()
        }
    }

    /// Set the reply-to address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set the plain-text body
    pub fn with_plain_text(mut self, plain_text: impl Into<String>) -> Self {
        self.plain_text = Some(plain_text.into());
        self
    }

    /// Set the recipients
    pub fn with_to(mut self, to: Vec<String>) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the per-recipient variables
    pub fn with_recipient_variables(mut self, variables: RecipientVariables) -> Self {
        self.recipient_variables = Some(variables);
        self
    }

    /// Set the target lists
    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }

    /// Set the tracking query string
    pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = Some(query_string.into());
        self
    }

    /// Enable or disable open tracking
    pub fn with_track_opens(mut self, track: bool) -> Self {
        self.track_opens = Some(track);
        self
    }

    /// Enable or disable click tracking
    pub fn with_track_clicks(mut self, track: bool) -> Self {
        self.track_clicks = Some(track);
        self
    }

    /// Schedule the send for `at` in `timezone`
    pub fn with_schedule(mut self, at: NaiveDateTime, timezone: impl Into<String>) -> Self {
        self.schedule_date_time = Some(at);
        self.schedule_timezone = Some(timezone.into());
        self
    }

    /// Runs the local checks
    ///
    /// The sender address is format-checked only when present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = missing_fields(&[
            ("fromName", self.from_name.is_empty()),
            ("fromEmail", self.from_email.is_empty()),
            ("subject", self.subject.is_empty()),
            ("htmlText", self.html_text.is_empty()),
        ]);

        if !self.from_email.is_empty() {
            check_email("fromEmail", &self.from_email)?;
        }
        if let Some(to) = &self.to {
            check_recipients("to", to)?;
        }

        check_required(missing)
    }

    /// Wire fields, absent options omitted
    #[must_use]
    pub fn to_request_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert("from_name", &self.from_name);
        options.insert("from_email", &self.from_email);
        options.insert_opt("reply_to", self.reply_to.as_ref());
        options.insert("subject", &self.subject);
        options.insert("html_text", &self.html_text);
        options.insert_opt("plain_text", self.plain_text.as_ref());
        options.insert_opt("to", self.to.as_ref());
        options.insert_opt("recipient-variables", self.recipient_variables.clone());
        options.insert_opt("list_ids", self.list_ids.as_ref().map(|ids| ids.join(",")));
        options.insert_opt("query_string", self.query_string.as_ref());
        options.insert_opt("track_opens", self.track_opens);
        options.insert_opt("track_clicks", self.track_clicks);
        options.insert_opt(
            "schedule_date_time",
            self.schedule_date_time
                .map(|at| at.format(SCHEDULE_FORMAT).to_string()),
        );
        options.insert_opt("schedule_timezone", self.schedule_timezone.as_ref());
        options
    }
}

/// Options for creating a campaign
///
/// `from_name`, `from_email`, `title`, `subject` and `html_text` are required.
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCampaignOptions {
    /// Sender display name
    pub from_name: String,
    /// Sender address
    pub from_email: String,
    /// Internal campaign title
    pub title: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_text: String,
    /// Reply-to address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Plain-text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    /// Lists to send to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
    /// Segments to send to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_ids: Option<Vec<String>>,
    /// Lists to exclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_list_ids: Option<Vec<String>>,
    /// Segments to exclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_segment_ids: Option<Vec<String>>,
    /// Query string appended to tracked links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
    /// Track opens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_opens: Option<bool>,
    /// Track clicks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_clicks: Option<bool>,
    /// Send the campaign right after creating it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_campaign: Option<bool>,
    /// Scheduled send time
    #[serde(skip_serializing_if = "Option::is_none", with = "schedule_format")]
    pub schedule_date_time: Option<NaiveDateTime>,
    /// Time zone of `schedule_date_time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_timezone: Option<String>,
}

impl CreateCampaignOptions {
    /// Creates options with the required fields
    pub fn new(
        from_name: impl Into<String>,
        from_email: impl Into<String>,
        title: impl Into<String>,
        subject: impl Into<String>,
        html_text: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            from_email: from_email.into(),
            title: title.into(),
            subject: subject.into(),
            html_text: html_text.into(),
            ..Default::default()
        }
    }

    /// Set the reply-to address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set the plain-text body
    pub fn with_plain_text(mut self, plain_text: impl Into<String>) -> Self {
        self.plain_text = Some(plain_text.into());
        self
    }

    /// Set the target lists
    pub fn with_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.list_ids = Some(list_ids);
        self
    }

    /// Set the target segments
    pub fn with_segment_ids(mut self, segment_ids: Vec<String>) -> Self {
        self.segment_ids = Some(segment_ids);
        self
    }

    /// Set the excluded lists
    pub fn with_exclude_list_ids(mut self, list_ids: Vec<String>) -> Self {
        self.exclude_list_ids = Some(list_ids);
        self
    }

    /// Set the excluded segments
    pub fn with_exclude_segment_ids(mut self, segment_ids: Vec<String>) -> Self {
        self.exclude_segment_ids = Some(segment_ids);
        self
    }

    /// Set the tracking query string
    pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = Some(query_string.into());
        self
    }

    /// Enable or disable open tracking
    pub fn with_track_opens(mut self, track: bool) -> Self {
        self.track_opens = Some(track);
        self
    }

    /// Enable or disable click tracking
    pub fn with_track_clicks(mut self, track: bool) -> Self {
        self.track_clicks = Some(track);
        self
    }

    /// Send immediately after creation
    pub fn with_send_campaign(mut self, send: bool) -> Self {
        self.send_campaign = Some(send);
        self
    }

    /// Schedule the send for `at` in `timezone`
    pub fn with_schedule(mut self, at: NaiveDateTime, timezone: impl Into<String>) -> Self {
        self.schedule_date_time = Some(at);
        self.schedule_timezone = Some(timezone.into());
        self
    }

    /// Runs the local checks
    ///
    /// The sender address is always format-checked, so a missing one reports
    /// `fromEmail` alone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = missing_fields(&[
            ("fromName", self.from_name.is_empty()),
            ("fromEmail", self.from_email.is_empty()),
            ("title", self.title.is_empty()),
            ("subject", self.subject.is_empty()),
            ("htmlText", self.html_text.is_empty()),
        ]);

        check_email("fromEmail", &self.from_email)?;

        check_required(missing)
    }

    /// Wire fields, absent options omitted
    #[must_use]
    pub fn to_request_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        options.insert("from_name", &self.from_name);
        options.insert("from_email", &self.from_email);
        options.insert_opt("reply_to", self.reply_to.as_ref());
        options.insert("title", &self.title);
        options.insert("subject", &self.subject);
        options.insert("html_text", &self.html_text);
        options.insert_opt("plain_text", self.plain_text.as_ref());
        options.insert_opt("list_ids", self.list_ids.as_ref());
        options.insert_opt("segment_ids", self.segment_ids.as_ref());
        options.insert_opt("exclude_list_ids", self.exclude_list_ids.as_ref());
        options.insert_opt("exclude_segments_ids", self.exclude_segment_ids.as_ref());
        options.insert_opt("query_string", self.query_string.as_ref());
        options.insert_opt("track_opens", self.track_opens);
        options.insert_opt("track_clicks", self.track_clicks);
        options.insert_opt("send_campaign", self.send_campaign);
        options.insert_opt(
            "schedule_date_time",
            self.schedule_date_time
                .map(|at| at.format(SCHEDULE_FORMAT).to_string()),
        );
        options.insert_opt("schedule_timezone", self.schedule_timezone.as_ref());
        options
    }
}

/// Paging and status filter for campaign and subscriber listings
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// Page number (default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Optional status filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PageQuery {
    /// Query for the first page with the default size
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Appends `page`, `limit` and `status` to `options`
    pub fn apply_to(&self, options: &mut RequestOptions) {
        options.insert("page", self.page.unwrap_or(DEFAULT_PAGE));
        options.insert("limit", self.limit.unwrap_or(DEFAULT_LIMIT));
        options.insert_opt("status", self.status.as_ref());
    }
}

mod schedule_format {
    use super::SCHEDULE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => serializer.serialize_str(&at.format(SCHEDULE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .filter(|s| !s.is_empty())
            .map(|s| {
                NaiveDateTime::parse_from_str(&s, SCHEDULE_FORMAT).map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}
