use std::str::FromStr;

use common::herald_err;
use common::hints::Urgency;
use common::utils::errors::{HeraldError, HeraldErrorKind};

pub const USAGE: &str = "\
herald - send a desktop notification

Usage:
  herald [OPTIONS] SUMMARY [BODY]
  herald --capabilities
  herald --server-info

Options:
  -a, --app-name NAME        sending application name
  -i, --icon ICON            icon name or path
  -r, --replaces-id ID       id of a notification to replace (0 = new)
  -t, --expire-timeout MS    timeout in ms (-1 server default, 0 never)
  -u, --urgency LEVEL        low | normal | critical
  -c, --category CATEGORY    notification category hint
      --transient            mark the notification transient
      --action ID:LABEL      append an action pair (repeatable)
  -h, --help                 show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Send,
    Capabilities,
    ServerInfo,
    Help,
}

#[derive(Debug, Default)]
pub struct Flags {
    pub mode: Mode,
    pub app_name: String,
    pub replaces_id: u32,
    pub icon: String,
    pub summary: String,
    pub body: String,
    /// Flattened (id, label) pairs, wire order.
    pub actions: Vec<String>,
    pub urgency: Option<Urgency>,
    pub category: Option<String>,
    pub transient: bool,
    pub expire_timeout: i32,
}

impl Flags {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, HeraldError> {
        let mut args = args.into_iter().skip(1);

        let mut flags = Flags {
            app_name: "herald".into(),
            expire_timeout: -1,
            ..Default::default()
        };
        let mut summary = None;
        let mut body = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--capabilities" => flags.mode = Mode::Capabilities,
                "--server-info" => flags.mode = Mode::ServerInfo,
                "-h" | "--help" => flags.mode = Mode::Help,
                "-a" | "--app-name" => flags.app_name = Self::value(&mut args, &arg)?,
                "-i" | "--icon" => flags.icon = Self::value(&mut args, &arg)?,
                "-r" | "--replaces-id" => {
                    flags.replaces_id = Self::value(&mut args, &arg)?.parse().map_err(|_| {
                        herald_err!(HeraldErrorKind::InvalidFlag, "{} expects an unsigned id", arg)
                    })?;
                }
                "-t" | "--expire-timeout" => {
                    flags.expire_timeout = Self::value(&mut args, &arg)?.parse().map_err(|_| {
                        herald_err!(HeraldErrorKind::InvalidFlag, "{} expects milliseconds", arg)
                    })?;
                }
                "-u" | "--urgency" => {
                    flags.urgency = Some(Urgency::from_str(&Self::value(&mut args, &arg)?)?);
                }
                "-c" | "--category" => flags.category = Some(Self::value(&mut args, &arg)?),
                "--transient" => flags.transient = true,
                "--action" => {
                    let value = Self::value(&mut args, &arg)?;
                    let (id, label) = value.split_once(':').ok_or_else(|| {
                        herald_err!(HeraldErrorKind::InvalidFlag, "{} expects ID:LABEL", arg)
                    })?;
                    flags.actions.push(id.to_string());
                    flags.actions.push(label.to_string());
                }
                _ if arg.starts_with('-') => {
                    return Err(herald_err!(
                        HeraldErrorKind::InvalidFlag,
                        "unknown flag: {}",
                        arg
                    ));
                }
                _ if summary.is_none() => summary = Some(arg),
                _ if body.is_none() => body = Some(arg),
                _ => {
                    return Err(herald_err!(
                        HeraldErrorKind::InvalidFlag,
                        "unexpected argument: {}",
                        arg
                    ));
                }
            }
        }

        if flags.mode == Mode::Send {
            flags.summary = summary
                .ok_or_else(|| herald_err!(HeraldErrorKind::InvalidFlag, "missing SUMMARY"))?;
            flags.body = body.unwrap_or_default();
        }

        Ok(flags)
    }

    fn value(
        args: &mut impl Iterator<Item = String>,
        flag: &str,
    ) -> Result<String, HeraldError> {
        args.next()
            .ok_or_else(|| herald_err!(HeraldErrorKind::InvalidFlag, "{} expects a value", flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, HeraldError> {
        let argv = std::iter::once("herald".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>();
        Flags::parse(argv)
    }

    #[test]
    fn full_send_invocation() {
        let flags = parse(&[
            "-a", "mailer", "-u", "critical", "-t", "5000", "--action", "open:Open",
            "--transient", "Title", "Body text",
        ])
        .unwrap();

        assert_eq!(flags.mode, Mode::Send);
        assert_eq!(flags.app_name, "mailer");
        assert_eq!(flags.urgency, Some(Urgency::Critical));
        assert_eq!(flags.expire_timeout, 5000);
        assert_eq!(flags.actions, vec!["open", "Open"]);
        assert!(flags.transient);
        assert_eq!(flags.summary, "Title");
        assert_eq!(flags.body, "Body text");
    }

    #[test]
    fn defaults_match_the_wire_sentinels() {
        let flags = parse(&["hello"]).unwrap();
        assert_eq!(flags.replaces_id, 0);
        assert_eq!(flags.expire_timeout, -1);
        assert_eq!(flags.urgency, None);
        assert!(flags.body.is_empty());
    }

    #[test]
    fn summary_is_required_for_send() {
        let err = parse(&["-a", "mailer"]).unwrap_err();
        assert_eq!(err.kind, HeraldErrorKind::InvalidFlag);
    }

    #[test]
    fn query_modes_need_no_summary() {
        assert_eq!(parse(&["--capabilities"]).unwrap().mode, Mode::Capabilities);
        assert_eq!(parse(&["--server-info"]).unwrap().mode, Mode::ServerInfo);
    }

    #[test]
    fn flag_errors_name_the_offending_flag() {
        assert_eq!(parse(&["-i"]).unwrap_err().message, "-i expects a value");
        assert_eq!(
            parse(&["--frobnicate", "x"]).unwrap_err().message,
            "unknown flag: --frobnicate"
        );
        assert_eq!(
            parse(&["-r", "minus-one", "x"]).unwrap_err().message,
            "-r expects an unsigned id"
        );
    }

    #[test]
    fn bad_values_are_flag_errors() {
        assert!(parse(&["-r", "minus-one", "x"]).is_err());
        assert!(parse(&["-u", "screaming", "x"]).is_err());
        assert!(parse(&["--action", "no-colon", "x"]).is_err());
        assert!(parse(&["--frobnicate", "x"]).is_err());
        assert!(parse(&["-i"]).is_err());
    }
}
