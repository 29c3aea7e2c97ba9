use crate::bean::Bean;
use crate::bean::Properties;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Utc;

/// Bean covering every property type family the table knows about.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestBean {
    pub(crate) p_byte: i8,
    pub(crate) p_short: i16,
    pub(crate) p_int: i32,
    pub(crate) p_long: i64,
    pub(crate) p_float: f32,
    pub(crate) p_double: f64,
    pub(crate) p_boolean: bool,
    pub(crate) w_byte: Option<i8>,
    pub(crate) w_short: Option<i16>,
    pub(crate) w_int: Option<i32>,
    pub(crate) w_long: Option<i64>,
    pub(crate) w_float: Option<f32>,
    pub(crate) w_double: Option<f64>,
    pub(crate) w_boolean: Option<bool>,
    pub(crate) string: Option<String>,
    pub(crate) big_integer: Option<i128>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) timestamp: Option<NaiveDateTime>,
    pub(crate) zoned_timestamp: Option<DateTime<Utc>>,
    pub(crate) time: Option<NaiveTime>,
    pub(crate) blob: Option<Vec<u8>>,
}

impl Bean for TestBean {
    fn describe(properties: &mut Properties<Self>) {
        properties
            .property("pByte", |bean: &Self| bean.p_byte)
            .property("pShort", |bean: &Self| bean.p_short)
            .property("pInt", |bean: &Self| bean.p_int)
            .property("pLong", |bean: &Self| bean.p_long)
            .property("pFloat", |bean: &Self| bean.p_float)
            .property("pDouble", |bean: &Self| bean.p_double)
            .property("pBoolean", |bean: &Self| bean.p_boolean)
            .property("wByte", |bean: &Self| bean.w_byte)
            .property("wShort", |bean: &Self| bean.w_short)
            .property("wInt", |bean: &Self| bean.w_int)
            .property("wLong", |bean: &Self| bean.w_long)
            .property("wFloat", |bean: &Self| bean.w_float)
            .property("wDouble", |bean: &Self| bean.w_double)
            .property("wBoolean", |bean: &Self| bean.w_boolean)
            .property("string", |bean: &Self| bean.string.clone())
            .property("bigInteger", |bean: &Self| bean.big_integer)
            .property("date", |bean: &Self| bean.date)
            .property("timestamp", |bean: &Self| bean.timestamp)
            .property("zonedTimestamp", |bean: &Self| bean.zoned_timestamp)
            .property("time", |bean: &Self| bean.time)
            .property("blob", |bean: &Self| bean.blob.clone())
            .write_only::<String>("secret");
    }
}

impl TestBean {
    /// A bean with every property populated.
    pub(crate) fn filled(seed: i32) -> Self {
        let date = NaiveDate::from_ymd_opt(2018, 3, 1).expect("date literal");
        let time = NaiveTime::from_hms_opt(12, 34, 56).expect("time literal");
        Self {
            p_byte: seed as i8,
            p_short: seed as i16,
            p_int: seed,
            p_long: seed as i64,
            p_float: seed as f32,
            p_double: seed as f64,
            p_boolean: seed % 2 == 0,
            w_byte: Some(seed as i8),
            w_short: Some(seed as i16),
            w_int: Some(seed),
            w_long: Some(seed as i64),
            w_float: Some(seed as f32),
            w_double: Some(seed as f64),
            w_boolean: Some(seed % 2 == 1),
            string: Some(format!("cat{}", seed)),
            big_integer: Some(seed as i128),
            date: Some(date),
            timestamp: Some(date.and_time(time)),
            zoned_timestamp: Some(date.and_time(time).and_utc()),
            time: Some(time),
            blob: Some(vec![seed as u8; 3]),
        }
    }
}
