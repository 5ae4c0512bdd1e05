use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Document metadata shown by PDF readers in their document properties. Only the
/// fields that are set end up in the file.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    /// No prescribed format
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Adobe Acrobat suggests a comma separated list
    pub keywords: Option<String>,
    /// The application that created the document; defaults to this crate's name and version
    pub creator: Option<String>,
    /// Defaults to the time the document is written
    pub creation_date: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Pin the creation date, i.e. to get byte-for-byte reproducible output
    pub fn creation_date<D: Into<DateTime<FixedOffset>>>(&mut self, date: D) -> &mut Self {
        self.creation_date = Some(date.into());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        match &self.creator {
            Some(creator) => info.creator(TextStr(creator.as_str())),
            None => info.creator(TextStr(concat!(
                env!("CARGO_PKG_NAME"),
                " v",
                env!("CARGO_PKG_VERSION")
            ))),
        };

        let date = self
            .creation_date
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&date));
    }
}

/// Offsets between -1h and 0 can't carry their sign in the hour field, so those
/// dates are written in UTC instead
fn pdf_date(date: &DateTime<FixedOffset>) -> PDate {
    let offset = date.offset().local_minus_utc();
    let (date, offset) = if (-3599..0).contains(&offset) {
        (date.naive_utc(), 0)
    } else {
        (date.naive_local(), offset)
    };
    let offset_hours = offset / (60 * 60);
    let offset_minutes = (offset.abs() % (60 * 60)) / 60;

    PDate::new(date.year() as u16)
        .month(date.month() as u8)
        .day(date.day() as u8)
        .hour(date.hour() as u8)
        .minute(date.minute() as u8)
        .second(date.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(info: &Info) -> String {
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);
        String::from_utf8_lossy(&writer.finish()).into_owned()
    }

    #[test]
    fn only_set_fields_are_written() {
        let mut info = Info::new();
        info.title("Quarterly report");
        let pdf = written(&info);
        assert!(pdf.contains("/Title (Quarterly report)"));
        assert!(!pdf.contains("/Author"));
        assert!(pdf.contains(concat!("/Creator (", env!("CARGO_PKG_NAME"))));
    }

    #[test]
    fn pinned_dates_are_reproducible() {
        let date = DateTime::parse_from_rfc3339("2024-03-05T10:20:30-06:30").unwrap();
        let mut info = Info::new();
        info.author("Jane").creator("report-tool").creation_date(date);

        let pdf = written(&info);
        assert!(pdf.contains("/Creator (report-tool)"));
        assert!(pdf.contains("/CreationDate (D:20240305102030-06'30)"));
        assert_eq!(pdf, written(&info));
    }

    #[test]
    fn sub_hour_offsets_keep_their_sign() {
        let date_in = |rfc3339: &str| {
            let mut info = Info::new();
            info.creation_date(DateTime::parse_from_rfc3339(rfc3339).unwrap());
            written(&info)
        };

        assert!(date_in("2024-03-05T10:20:30+00:30").contains("(D:20240305102030+00'30)"));
        assert!(date_in("2024-03-05T10:20:30-00:30").contains("(D:20240305105030Z)"));
        assert!(date_in("2024-03-05T10:20:30+00:00").contains("(D:20240305102030Z)"));
        assert!(date_in("2024-03-05T10:20:30+05:45").contains("(D:20240305102030+05'45)"));
    }
}
