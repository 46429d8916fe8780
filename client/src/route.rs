use tracing::debug;

use wordgames_common::models::Cell;

/// Prefix the solver puts on successful path-search responses.
const ROUTE_PREFIX: &str = "Ruta:";

/// Parse the solver's textual path encoding into an ordered cell list.
///
/// A successful search comes back as `Ruta: C(0,0);A(0,1);S(0,2);A(0,3)`.
/// Returns `None` when the body is not a route at all (the solver found no
/// path). Malformed triples inside a route are skipped, never fatal.
pub fn parse_route(body: &str) -> Option<Vec<Cell>> {
    let rest = body.strip_prefix(ROUTE_PREFIX)?;

    let cells = rest
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let cell = parse_triple(token);
            if cell.is_none() {
                debug!("skipping malformed route token: {:?}", token);
            }
            cell
        })
        .collect();

    Some(cells)
}

/// Parse one `L(row,column)` triple.
fn parse_triple(token: &str) -> Option<Cell> {
    let mut chars = token.chars();
    let letter = chars.next()?;
    if !letter.is_alphabetic() {
        return None;
    }
    if chars.next()? != '(' {
        return None;
    }

    let rest = chars.as_str();
    let inner = &rest[..rest.find(')')?];
    let (row, column) = inner.split_once(',')?;

    Some(Cell {
        row: row.trim().parse().ok()?,
        column: column.trim().parse().ok()?,
        letter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_route() {
        let cells = parse_route("Ruta: C(0,0);A(0,1);S(0,2);A(0,3)").unwrap();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Cell { row: 0, column: 0, letter: 'C' });
        assert_eq!(cells[3], Cell { row: 0, column: 3, letter: 'A' });
    }

    #[test]
    fn non_route_body_is_no_route() {
        assert!(parse_route("No encontrada").is_none());
        assert!(parse_route("").is_none());
    }

    #[test]
    fn malformed_triples_are_skipped() {
        let cells = parse_route("Ruta: C(0,0);garbage;A(1,x);T(2,2)").unwrap();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].letter, 'C');
        assert_eq!(cells[1], Cell { row: 2, column: 2, letter: 'T' });
    }

    #[test]
    fn empty_route_parses_to_no_cells() {
        let cells = parse_route("Ruta: ").unwrap();
        assert!(cells.is_empty());
    }
}
