//! Command-line arguments and the small value grammars they use

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use datagrid_core::{ColumnDef, FilterKind};

#[derive(Parser, Debug)]
#[command(
    name = "datagrid",
    version,
    about = "Filter, sort and page tabular JSON data in the terminal"
)]
pub struct Args {
    /// JSON file holding an array of row objects. Without it the built-in
    /// payments sample is shown.
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Column definition `id[:Title[:text|number|date]]` (repeatable).
    /// Inferred from the first row when omitted.
    #[arg(long = "column", value_name = "SPEC")]
    pub columns: Vec<ColumnSpec>,

    /// Column matched by `--search`; every column when omitted
    #[arg(long, value_name = "COLUMN")]
    pub search_column: Option<String>,

    /// Global search text
    #[arg(long)]
    pub search: Option<String>,

    /// Text filter `column=value[,value...]` (repeatable)
    #[arg(long = "filter", value_name = "COLUMN=VALUES")]
    pub filters: Vec<TextFilterArg>,

    /// Number filter `column=min..max`; either side may be empty (repeatable)
    #[arg(long = "range", value_name = "COLUMN=MIN..MAX")]
    pub ranges: Vec<RangeArg>,

    /// Date filter `column=YYYY-MM-DD..YYYY-MM-DD`; either side may be empty (repeatable)
    #[arg(long = "dates", value_name = "COLUMN=FROM..TO")]
    pub dates: Vec<RangeArg>,

    /// Filter a date column to the current month (repeatable)
    #[arg(long = "this-month", value_name = "COLUMN")]
    pub this_month: Vec<String>,

    /// Filter a date column to the previous month (repeatable)
    #[arg(long = "previous-month", value_name = "COLUMN")]
    pub previous_month: Vec<String>,

    /// Sort by `column[:asc|desc]`; repeat for multi-column sorting
    #[arg(long = "sort", value_name = "COLUMN[:DIR]")]
    pub sort: Vec<SortArg>,

    /// Hide a column (repeatable)
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page. Overrides the settings file.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Select every row on the shown page
    #[arg(long)]
    pub select_page: bool,

    /// Print the grid state as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH", env = "DATAGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,datagrid_core=trace`. `RUST_LOG` wins.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Also write JSON logs under the platform data dir
    #[arg(long)]
    pub log_json: bool,
}

/// `id[:Title[:kind]]`
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub id: String,
    pub title: String,
    pub kind: Option<FilterKind>,
}

impl ColumnSpec {
    pub fn to_column(&self) -> ColumnDef {
        let column = ColumnDef::new(self.id.clone(), self.title.clone());
        match self.kind {
            Some(kind) => column.filter_kind(kind),
            None => column,
        }
    }
}

impl FromStr for ColumnSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let id = parts.next().unwrap_or_default().trim();
        if id.is_empty() {
            return Err(format!("column spec `{s}` has no id"));
        }
        let title = parts.next().unwrap_or_default().trim().to_string();
        let kind = match parts.next().map(str::trim) {
            None | Some("") => None,
            Some(kind) => Some(kind.parse::<FilterKind>()?),
        };
        Ok(Self {
            id: id.to_string(),
            title,
            kind,
        })
    }
}

fn split_assignment(s: &str) -> Result<(&str, &str), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `column=value`, got `{s}`"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in `{s}`"));
    }
    Ok((column, value))
}

/// `column=a,b,c`
#[derive(Debug, Clone, PartialEq)]
pub struct TextFilterArg {
    pub column: String,
    pub values: Vec<String>,
}

impl FromStr for TextFilterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, values) = split_assignment(s)?;
        Ok(Self {
            column: column.to_string(),
            values: values
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// `column=low..high`, sides kept as raw editor input
#[derive(Debug, Clone, PartialEq)]
pub struct RangeArg {
    pub column: String,
    pub low: String,
    pub high: String,
}

impl FromStr for RangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, range) = split_assignment(s)?;
        let (low, high) = range
            .split_once("..")
            .ok_or_else(|| format!("expected `low..high` in `{s}`"))?;
        Ok(Self {
            column: column.to_string(),
            low: low.trim().to_string(),
            high: high.trim().to_string(),
        })
    }
}

/// `column[:asc|desc]`
#[derive(Debug, Clone, PartialEq)]
pub struct SortArg {
    pub column: String,
    pub descending: bool,
}

impl FromStr for SortArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.rsplit_once(':') {
            Some((column, direction)) => (column, Some(direction)),
            None => (s, None),
        };
        let descending = match direction.map(|d| d.trim().to_ascii_lowercase()).as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => return Err(format!("unknown sort direction `{other}`")),
        };
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("missing column name in `{s}`"));
        }
        Ok(Self {
            column: column.to_string(),
            descending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_spec() {
        assert_eq!(
            "amount:Amount:number".parse::<ColumnSpec>(),
            Ok(ColumnSpec {
                id: "amount".into(),
                title: "Amount".into(),
                kind: Some(FilterKind::Number),
            })
        );
        assert_eq!(
            "id".parse::<ColumnSpec>(),
            Ok(ColumnSpec {
                id: "id".into(),
                title: String::new(),
                kind: None,
            })
        );
        assert!("x:X:boolean".parse::<ColumnSpec>().is_err());
        assert!(":Title".parse::<ColumnSpec>().is_err());
    }

    #[test]
    fn test_text_filter_arg() {
        assert_eq!(
            "status=success, failed".parse::<TextFilterArg>(),
            Ok(TextFilterArg {
                column: "status".into(),
                values: vec!["success".into(), "failed".into()],
            })
        );
        assert!("status".parse::<TextFilterArg>().is_err());
    }

    #[test]
    fn test_range_arg_allows_open_sides() {
        assert_eq!(
            "amount=50..".parse::<RangeArg>(),
            Ok(RangeArg {
                column: "amount".into(),
                low: "50".into(),
                high: String::new(),
            })
        );
        let dates = "createdAt=2023-01-01..2023-01-31".parse::<RangeArg>().unwrap();
        assert_eq!((dates.low.as_str(), dates.high.as_str()), ("2023-01-01", "2023-01-31"));
        assert!("amount=50".parse::<RangeArg>().is_err());
    }

    #[test]
    fn test_sort_arg() {
        assert_eq!(
            "amount:desc".parse::<SortArg>(),
            Ok(SortArg {
                column: "amount".into(),
                descending: true,
            })
        );
        assert!(!"email".parse::<SortArg>().unwrap().descending);
        assert!("amount:sideways".parse::<SortArg>().is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "datagrid",
            "--search",
            "example",
            "--range",
            "amount=50..",
            "--sort",
            "amount:desc",
            "--page-size",
            "2",
        ])
        .unwrap();
        assert_eq!(args.search.as_deref(), Some("example"));
        assert_eq!(args.ranges.len(), 1);
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, Some(2));
    }
}
