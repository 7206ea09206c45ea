#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use openleg_model::{
    Addendum, Agenda, Bill, BillEvent, Calendar, CalendarEntry, Committee, Meeting, Person,
    Section, Sequence, Supplemental, Transcript, Vote,
};

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn person(name: &str) -> Person {
    Person {
        fullname: Some(name.to_string()),
        position: None,
    }
}

pub fn roll_call() -> Vote {
    Vote {
        vote_type: Vote::TYPE_FLOOR,
        vote_date: Some(at(2014, 3, 5, 14, 30)),
        description: Some("Third reading".into()),
        bill: Some(Box::new(Bill {
            senate_bill_no: Some("S1234-2013".into()),
            year: 2013,
            ..Default::default()
        })),
        ayes: vec!["ADAMS".into(), "BALL".into()],
        nays: vec!["CARLUCCI".into()],
        ..Default::default()
    }
}

/// A base bill with one amendment; both carry one roll call.
pub fn bill() -> Bill {
    let amendment = Bill {
        senate_bill_no: Some("S1234A-2013".into()),
        year: 2013,
        title: Some("Relates to parking".into()),
        summary: Some("An act to amend the vehicle and traffic law".into()),
        votes: vec![roll_call()],
        ..Default::default()
    };

    Bill {
        senate_bill_no: Some("S1234-2013".into()),
        year: 2013,
        title: Some("Relates to parking".into()),
        summary: Some("An act to amend...".into()),
        sponsor: Some(person("SMITH")),
        co_sponsors: vec![person("JONES"), person("LEE")],
        act_clause: Some("AN ACT to amend the vehicle and traffic law".into()),
        fulltext: Some("STATE OF NEW YORK ...".into()),
        memo: Some("PURPOSE: ...".into()),
        law: Some("Veh & Traf L".into()),
        previous_versions: vec!["S4321-2011".into()],
        amendments: vec![amendment],
        latest_amendment: Some("A".into()),
        bill_events: vec![BillEvent {
            bill_id: Some("S1234-2013".into()),
            event_date: Some(at(2013, 1, 9, 0, 0)),
            event_text: Some("REFERRED TO TRANSPORTATION".into()),
        }],
        votes: vec![roll_call()],
        publish_date: Some(at(2013, 1, 9, 10, 15)),
        ..Default::default()
    }
}

pub fn meeting() -> Meeting {
    let agenda = Agenda {
        number: 4,
        session_year: 2013,
        year: 2014,
        addendums: Vec::new(),
    };

    Meeting {
        meeting_date_time: Some(at(2014, 3, 4, 10, 0)),
        meetday: Some("Tuesday".into()),
        location: Some("Room 124 CAP".into()),
        committee_name: Some("Transportation".into()),
        committee_chair: Some("SMITH".into()),
        notes: None,
        committee: Some(Committee {
            name: Some("Transportation".into()),
            chair: Some(person("SMITH")),
            members: vec![person("JONES")],
        }),
        bills: vec![bill()],
        votes: vec![roll_call()],
        addendums: vec![Addendum {
            addendum_id: Some("A".into()),
            week_of: Some("2014-03-03".into()),
            publication_date_time: Some(at(2014, 3, 3, 9, 0)),
            agenda: Some(Box::new(agenda)),
            meetings: vec![Meeting::default()],
        }],
    }
}

fn entry(no: &str) -> CalendarEntry {
    CalendarEntry {
        no: Some(no.to_string()),
        bill: Some(bill()),
        sub_bill: None,
        bill_high: Some("true".into()),
        motion_date: None,
        section: Some(Box::new(Section::default())),
        sequence: None,
    }
}

/// A calendar whose supplemental carries a section and an active list,
/// each with back-references the API must not follow.
pub fn calendar() -> Calendar {
    let owner = Calendar {
        calendar_id: Some("cal-floor-12-2013".into()),
        no: 12,
        ..Default::default()
    };

    let supplemental = Supplemental {
        supplemental_id: Some("cal-floor-12-2013-supp-".into()),
        calendar_date: Some(at(2014, 3, 5, 0, 0)),
        release_date_time: Some(at(2014, 3, 4, 18, 0)),
        calendar: Some(Box::new(owner.clone())),
        sections: vec![Section {
            name: Some("Third Reading".into()),
            r#type: 400,
            cd: Some("400".into()),
            calendar: Some(Box::new(owner.clone())),
            supplemental: None,
            calendar_entries: vec![entry("101")],
        }],
        sequence: Some(Sequence {
            no: Some("1".into()),
            act_cal_date: Some(at(2014, 3, 5, 0, 0)),
            release_date_time: None,
            notes: Some("internal".into()),
            supplemental: None,
            calendar_entries: vec![entry("101")],
        }),
    };

    Calendar {
        calendar_id: Some("cal-floor-12-2013".into()),
        year: 2014,
        r#type: Some("floor".into()),
        session_year: 2013,
        no: 12,
        supplementals: vec![supplemental],
    }
}

pub fn transcript() -> Transcript {
    Transcript {
        id: Some("030514.v1".into()),
        time_stamp: Some(at(2014, 3, 5, 15, 0)),
        location: Some("ALBANY, NEW YORK".into()),
        r#type: Some("REGULAR SESSION".into()),
        transcript_text: Some("THE PRESIDENT: The Senate will come to order.".into()),
        transcript_text_processed: Some("the president the senate will come to order".into()),
        related_bills: vec![bill()],
    }
}
