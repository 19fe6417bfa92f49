use chrono::NaiveDate;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::metrics::normalize_working_hours;
use crate::core::recommend::{Outlook, Recommendation};
use crate::errors::{AppError, AppResult};
use crate::models::load::MeetingLoad;
use crate::models::report::WeekReport;
use crate::models::week::WeekConfig;
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::formatting::{fmt_hours, fmt_mins, fmt_pct};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        date: date_arg,
        hours,
        target,
        meeting_hours,
        meetings,
        blocks,
        switch_cost,
        json,
    } = cmd
    {
        let day = resolve_date(date_arg)?;

        // A zero hours input is a widget artifact, not a real answer.
        let week_hours = normalize_working_hours(*hours, cfg.standard_week_hours());
        check_week_hours(week_hours, cfg)?;

        let week = WeekConfig::from_total(week_hours, cfg.working_days);
        let load = MeetingLoad {
            total_meeting_hours: *meeting_hours,
            total_meetings: *meetings,
            total_meeting_blocks: *blocks,
            context_switch_cost_mins: *switch_cost,
        };
        load.validate(&week, cfg)?;

        let report = Core::build_report(day, week, load, *target, cfg.rounding);

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        print_advisories(week_hours, cfg);
        print_report(&report);
    }
    Ok(())
}

fn resolve_date(date_arg: &Option<String>) -> AppResult<NaiveDate> {
    let today = date::today();

    let day = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => today,
    };

    // The analysable window is bounded, like the original date picker.
    if !date::within_one_year(day, today) {
        return Err(AppError::DateOutOfRange(format!(
            "{} is more than one year away from today",
            day
        )));
    }

    Ok(day)
}

fn check_week_hours(week_hours: f64, cfg: &Config) -> AppResult<()> {
    if week_hours < cfg.min_week_hours || week_hours > cfg.max_week_hours {
        return Err(AppError::out_of_range(
            "hours",
            format!(
                "{} is outside {}..={}",
                week_hours, cfg.min_week_hours, cfg.max_week_hours
            ),
        ));
    }
    Ok(())
}

/// Advisory messages for long weeks. These never stop the evaluation.
fn print_advisories(week_hours: f64, cfg: &Config) {
    let standard = cfg.standard_week_hours();

    if week_hours > standard && week_hours <= cfg.warning_trigger_hours {
        messages::warning(format!(
            "Your reported working hours are in excess of {}",
            standard as i64
        ));
    }

    if week_hours > cfg.warning_trigger_hours {
        messages::error(format!(
            "Your working hours are in excess of {}",
            cfg.warning_trigger_hours as i64
        ));
    }
}

fn print_report(report: &WeekReport) {
    let week = &report.week;
    let m = &report.metrics;

    messages::header(format!("Your Results For w/c {}", report.week_commencing));

    println!(
        "Assumed working rhythm: {} days a week, {:.1} working hours a day, {} hours a week\n",
        week.working_days as i64,
        week.hours_per_day,
        week.total_week_hours as i64
    );

    let mut table = Table::new(vec![
        Column {
            header: "Metric".to_string(),
            width: 42,
        },
        Column {
            header: "Value".to_string(),
            width: 10,
        },
    ]);

    table.add_row(vec![
        "Total meeting time (hours)".to_string(),
        fmt_hours(m.meeting_time_hours),
    ]);
    table.add_row(vec![
        "Meeting time (%)".to_string(),
        fmt_pct(m.meeting_time_pct),
    ]);
    table.add_row(vec![
        "Average meeting duration (mins)".to_string(),
        fmt_mins(m.avg_meeting_len_min),
    ]);
    table.add_row(vec![
        "Average meeting block duration (mins)".to_string(),
        fmt_mins(m.avg_block_len_min),
    ]);
    table.add_row(vec![
        "Context switching tax (hours)".to_string(),
        fmt_hours(m.context_tax_hours),
    ]);
    table.add_row(vec![
        "Context switching tax (%)".to_string(),
        fmt_pct(m.context_tax_pct),
    ]);
    table.add_row(vec![
        "Non-deep work time (hours)".to_string(),
        fmt_hours(m.non_deep_hours),
    ]);
    table.add_row(vec![
        "Non-deep work time (%)".to_string(),
        fmt_pct(m.non_deep_pct),
    ]);
    table.add_row(vec![
        "Deep work time (hours)".to_string(),
        fmt_hours(m.deep_work_hours),
    ]);
    table.add_row(vec![
        "Deep work time (%)".to_string(),
        fmt_pct(m.deep_work_pct),
    ]);

    println!("{}", table.render());

    print_recommendation(report);
}

fn print_recommendation(report: &WeekReport) {
    let rec = &report.recommendation;

    messages::header(format!(
        "Your Recommendations For w/c {}",
        report.week_commencing
    ));

    println!(
        "You stated that you require {}% of your working week ({} hours) to be deep work.\n",
        rec.required_deep_pct,
        fmt_hours(rec.required_hours)
    );

    let color = color_for_balance(rec.balance_hours);

    match rec.outlook {
        Outlook::Deficit => {
            println!(
                "You have a deficit of {}{}{} hours to meet your deep work target.",
                color,
                fmt_hours(rec.balance_hours.abs()),
                RESET
            );
            println!(
                "We recommend you remove between {} and {} meeting(s) from your calendar,",
                rec.meetings_to_cut_low, rec.meetings_to_cut_high
            );
            println!(
                "based on an average meeting duration of {} minutes.",
                fmt_mins(report.metrics.avg_meeting_len_min)
            );
            println!("\nRemember to remove or reschedule your meetings responsibly! ✌️");
        }
        Outlook::Surplus => {
            println!(
                "Lucky you! You have a surplus of {}{}{} hours over your deep work target.",
                color,
                fmt_hours(rec.balance_hours.abs()),
                RESET
            );
            println!("You do not need to remove any meetings.");
        }
    }

    print_cut_metric(rec);
}

fn print_cut_metric(rec: &Recommendation) {
    let suffix = match rec.outlook {
        Outlook::Surplus => " (surplus)",
        Outlook::Deficit => "",
    };

    println!(
        "\nTime to target (hours){}: {}",
        suffix,
        fmt_hours(rec.balance_hours.abs())
    );
    println!(
        "Recommended meetings to cut{}: {} to {}",
        suffix, rec.meetings_to_cut_low, rec.meetings_to_cut_high
    );
}
