//! Synthetic upstream payloads shared by the parser and service tests.

/// Fields of a synthetic train record. Station fields are fixed.
pub struct TrainRecord<'a> {
    pub train_no: &'a str,
    pub train_name: &'a str,
    pub running_days: &'a str,
    pub from_time: &'a str,
}

impl<'a> TrainRecord<'a> {
    pub fn new(train_no: &'a str, train_name: &'a str, running_days: &'a str) -> Self {
        Self {
            train_no,
            train_name,
            running_days,
            from_time: "10.30",
        }
    }

    /// Record text including its leading marker. The internal id is the
    /// train number prefixed with "99".
    pub fn render(&self) -> String {
        format!(
            "^{no}~{name}~NEW DELHI~NDLS~MUMBAI CENTRAL~BCT~NEW DELHI~NDLS~MUMBAI CENTRAL~BCT\
             ~{from}~18.45~08.15~{days}~99{no}~SF~1384~",
            no = self.train_no,
            name = self.train_name,
            from = self.from_time,
            days = self.running_days,
        )
    }
}

/// A train-info payload holding one record.
pub fn train_payload(record: &TrainRecord<'_>) -> String {
    format!("~~~~~~~~{}~~~~~~~~", record.render())
}

/// A station-pair payload holding the given records, one per section.
pub fn between_payload(records: &[TrainRecord<'_>]) -> String {
    let mut raw = String::from("~~~~~5~From~To~~~~~~~~");
    for record in records {
        raw.push('~');
        raw.push_str(&record.render());
        raw.push_str("~~~~~~~~");
    }
    raw
}

/// A route row for a station, with the given serial, day and distance.
pub fn route_row(serial: u32, code: &str, arrive: &str, depart: &str, day: u32, km: u32) -> String {
    format!("^{serial}~{code}~{code} JN~{arrive}~{depart}~5~{km}~{day}~1~NR~")
}

/// A route payload: preamble followed by the given rows.
pub fn route_payload(rows: &[String]) -> String {
    let mut raw = String::from("~~TRAINROUTE~2012~");
    for row in rows {
        raw.push('~');
        raw.push_str(row);
    }
    raw
}

/// One live-board row in the upstream's markup.
pub fn board_row(train_no: &str, name: &str, from: &str, to: &str, time: &str, detail: &str) -> String {
    format!(
        "<tr><td><span class=\"name\">{train_no} {name}</span><div>{from} → {to}</div></td>\
         <td>{time} {detail}</td></tr>"
    )
}

/// A live-board page with the given rows.
pub fn board_page(rows: &[String]) -> String {
    format!(
        "<html><body><h1>Live Station</h1><table class=\"DataTable\">{}</table></body></html>",
        rows.concat()
    )
}
