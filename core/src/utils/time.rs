use chrono::{FixedOffset, NaiveDateTime, SecondsFormat, Utc};

/// Return time now as a RFC 3339 UTC string
pub(crate) fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Convert a CIM_DATETIME string (`yyyymmddHHMMSS.mmmmmm+UUU`) to RFC 3339.
/// Values that do not parse are passed through unchanged
pub(crate) fn cim_datetime_to_rfc3339(value: &str) -> String {
    let cim_length = 25;
    if value.len() != cim_length || !value.is_ascii() {
        return value.to_string();
    }

    let stamp = &value[0..14];
    let offset_sign = &value[21..22];
    let offset_result = value[22..25].parse::<i32>();
    let offset_minutes = match offset_result {
        Ok(result) => result,
        Err(_) => return value.to_string(),
    };

    let naive_result = NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S");
    let naive = match naive_result {
        Ok(result) => result,
        Err(_) => return value.to_string(),
    };

    let minutes = if offset_sign == "-" {
        -offset_minutes
    } else {
        offset_minutes
    };

    let seconds_per_minute = 60;
    let offset_option = FixedOffset::east_opt(minutes * seconds_per_minute);
    let offset = match offset_option {
        Some(result) => result,
        None => return value.to_string(),
    };

    match naive.and_local_timezone(offset).single() {
        Some(result) => result.to_rfc3339_opts(SecondsFormat::Secs, false),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{cim_datetime_to_rfc3339, rfc3339_now};

    #[test]
    fn test_rfc3339_now() {
        let now = rfc3339_now();
        assert!(now.ends_with('Z'));
    }

    #[test]
    fn test_cim_datetime_to_rfc3339() {
        let test_data = "20230415103000.000000+060";
        assert_eq!(
            cim_datetime_to_rfc3339(test_data),
            "2023-04-15T10:30:00+01:00"
        );
    }

    #[test]
    fn test_cim_datetime_negative_offset() {
        let test_data = "20191128120000.000000-300";
        assert_eq!(
            cim_datetime_to_rfc3339(test_data),
            "2019-11-28T12:00:00-05:00"
        );
    }

    #[test]
    fn test_cim_datetime_bad_value() {
        let test_data = "1/15/2023";
        assert_eq!(cim_datetime_to_rfc3339(test_data), "1/15/2023");
    }

    #[test]
    fn test_cim_datetime_empty_value() {
        assert_eq!(cim_datetime_to_rfc3339(""), "");
    }
}
