//! Worked/left summaries: the live status panel and the per-date report.

use crate::core::aggregate::Aggregator;
use crate::core::calculator::{Progress, Targets, Window};
use crate::core::calculator::target::format_duration;
use crate::core::configuration::Configuration;
use crate::core::session::SessionTracker;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, row};
use crate::utils::colors::{GREEN, GREY, RESET, colorize_optional};
use crate::utils::date::{day_label, month_label, week_label};
use crate::utils::time::format_timestamp;
use chrono::{Duration, NaiveDate, TimeZone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub label: String,
    pub progress: Progress,
}

/// Current state as shown by `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub logged_in_for: Option<Duration>,
    pub week: PeriodSummary,
    pub month: PeriodSummary,
    pub last_in: Option<i64>,
    pub last_out: Option<i64>,
    pub total: Duration,
}

/// Day, week and month around a chosen date, as shown by `report`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReport {
    pub date: NaiveDate,
    pub day: PeriodSummary,
    pub week: PeriodSummary,
    pub month: PeriodSummary,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn status<Tz: TimeZone>(
        store: &TimeStore,
        cfg: &Configuration,
        tracker: &SessionTracker,
        agg: &Aggregator,
        tz: &Tz,
        today: NaiveDate,
    ) -> AppResult<StatusReport> {
        let targets = Targets::from_monthly(cfg.monthly_target()?);

        let week = Window::week(tz, today)?;
        let month = Window::month(tz, today)?;

        Ok(StatusReport {
            logged_in_for: tracker.elapsed_since_login(),
            week: PeriodSummary {
                label: "This week".into(),
                progress: Progress::new(agg.total_between(week)?, targets.week),
            },
            month: PeriodSummary {
                label: "This month".into(),
                progress: Progress::new(agg.total_between(month)?, targets.month),
            },
            last_in: store.last_time_in()?,
            last_out: store.last_time_out()?,
            total: agg.total_all()?,
        })
    }

    pub fn for_date<Tz: TimeZone>(
        cfg: &Configuration,
        agg: &Aggregator,
        tz: &Tz,
        date: NaiveDate,
    ) -> AppResult<DateReport> {
        let targets = Targets::from_monthly(cfg.monthly_target()?);

        let summary = |label: String, window: Window, target: Duration| -> AppResult<PeriodSummary> {
            Ok(PeriodSummary {
                label,
                progress: Progress::new(agg.total_between(window)?, target),
            })
        };

        Ok(DateReport {
            date,
            day: summary(day_label(date), Window::day(tz, date)?, targets.day)?,
            week: summary(week_label(date), Window::week(tz, date)?, targets.week)?,
            month: summary(month_label(date), Window::month(tz, date)?, targets.month)?,
        })
    }

    pub fn print_status(report: &StatusReport, cfg: &Configuration) -> AppResult<()> {
        let long_fmt = cfg.long_time_format()?;
        let dt_fmt = cfg.datetime_format()?;

        header("Session");
        match report.logged_in_for {
            Some(d) => println!(
                "{GREEN}Logged in since {}{RESET}",
                format_duration(long_fmt, d)?
            ),
            None => println!("{GREY}Not logged in{RESET}"),
        }

        print_period(&report.week, cfg)?;
        print_period(&report.month, cfg)?;

        let fmt_ts = |ts: Option<i64>| -> AppResult<String> {
            match ts {
                Some(t) => format_timestamp(t, dt_fmt),
                None => Ok(colorize_optional("--")),
            }
        };

        header("History");
        row("Last log in", fmt_ts(report.last_in)?);
        row("Last log out", fmt_ts(report.last_out)?);
        row("Total time", format_duration(long_fmt, report.total)?);

        Ok(())
    }

    pub fn print_date_report(report: &DateReport, cfg: &Configuration) -> AppResult<()> {
        print_period(&report.day, cfg)?;
        print_period(&report.week, cfg)?;
        print_period(&report.month, cfg)?;
        Ok(())
    }
}

fn print_period(p: &PeriodSummary, cfg: &Configuration) -> AppResult<()> {
    let short_fmt = cfg.short_time_format()?;
    header(&p.label);
    row("Worked", p.progress.worked_text(short_fmt)?);
    row("Left", p.progress.left_text(short_fmt)?);
    Ok(())
}
