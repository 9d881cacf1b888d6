use super::patterns::{match_id, match_name};
use super::types::{LineBuffer, Rebase};

/// Rewrite every id line against its nearest preceding name line.
///
/// The backward search reads the live buffer, so a later id line can pair
/// with a name line an earlier id line already rewrote. The search includes
/// line `i` itself; when the id line is also its own name line, the id
/// rewrite is written last and wins.
pub fn rebase_lines(buffer: &mut LineBuffer) -> Vec<Rebase> {
    let mut rebases = Vec::new();

    for i in 0..buffer.lines.len() {
        let Some(id) = match_id(&buffer.lines[i].text) else {
            continue;
        };

        let found = (0..=i)
            .rev()
            .find_map(|j| match_name(&buffer.lines[j].text).map(|name| (j, name)));

        let Some((j, name)) = found else {
            tracing::debug!(line = i + 1, entry = %id.entry, "no name line found");
            continue;
        };

        tracing::info!("Replacing {}", id.entry);

        let name_text = name.rewrite(&id.entry);
        tracing::debug!(
            line = j + 1,
            before = %buffer.lines[j].text,
            after = %name_text,
            "rewrite name line"
        );
        buffer.lines[j].text = name_text;

        let id_text = id.rewrite(&name.value);
        tracing::debug!(
            line = i + 1,
            after = %id_text,
            "rewrite id line"
        );
        buffer.lines[i].text = id_text;

        rebases.push(Rebase {
            id_line: i,
            name_line: j,
            entry: id.entry,
            name: name.value,
        });
    }

    rebases
}
