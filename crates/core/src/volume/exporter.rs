use super::Volume;

/// Renders volumes as a single plain-text document, ordered by number.
///
/// Sections that are empty on a volume are skipped along with their
/// separating blank line. Volumes are separated by one blank line.
///
/// A blessing whose item is missing or blank is written as `Blessing N`
/// (1-based). Blank items get the placeholder too, not just absent ones,
/// since the stored item is always a string and an empty line would
/// break the `Item - Description` layout.
pub fn export_volumes(volumes: &[Volume]) -> String {
    let mut sorted: Vec<&Volume> = volumes.iter().collect();
    sorted.sort_by_key(|v| v.volume_number);

    let mut lines: Vec<String> = Vec::new();
    for (idx, volume) in sorted.iter().enumerate() {
        let edition = if volume.edition.is_empty() {
            String::new()
        } else {
            format!(" {}", volume.edition)
        };

        lines.push(format!(
            "The Abel Experience Volume {}: {}{}",
            volume.volume_number, volume.title, edition
        ));

        if !volume.body_lines.is_empty() {
            lines.push(String::new());
            lines.extend(volume.body_lines.iter().cloned());
        }

        if !volume.blessing_intro.is_empty() {
            lines.push(String::new());
            lines.push(format!("Life is: {}", volume.blessing_intro));
        }

        if !volume.blessings.is_empty() {
            lines.push(String::new());
            for (i, blessing) in volume.blessings.iter().enumerate() {
                let item = if blessing.item.trim().is_empty() {
                    format!("Blessing {}", i + 1)
                } else {
                    blessing.item.clone()
                };
                let description = blessing.description.trim();
                if description.is_empty() {
                    lines.push(item);
                } else {
                    lines.push(format!("{item} - {description}"));
                }
            }
        }

        if !volume.dream.is_empty() {
            lines.push(String::new());
            lines.push(volume.dream.clone());
        }

        lines.push(String::new());
        lines.push(format!("The Abel Experience: {}{}", volume.title, edition));

        if idx + 1 != sorted.len() {
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::volume::{parse_greentext, Blessing, VolumeStatus};

    fn volume(raw: &str) -> Volume {
        Volume::from_parsed(
            parse_greentext(raw),
            raw,
            VolumeStatus::Published,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn test_export_single_volume() {
        let v = volume(
            "Volume 1 – Dawn\n>wake up\n>stretch\nLife is simple\nTea (hot)\nBirds\nThe dream of a nap",
        );
        let expected = "\
The Abel Experience Volume 1: Dawn Dawn Edition

>wake up
>stretch

Life is: Life is simple

Tea - hot
Birds

The dream of a nap

The Abel Experience: Dawn Dawn Edition";
        assert_eq!(export_volumes(&[v]), expected);
    }

    #[test]
    fn test_export_sorts_and_separates_volumes() {
        let second = volume("Volume 2 – Two");
        let first = volume("Volume 1 – One");
        let expected = "\
The Abel Experience Volume 1: One One Edition

The Abel Experience: One One Edition

The Abel Experience Volume 2: Two Two Edition

The Abel Experience: Two Two Edition";
        assert_eq!(export_volumes(&[second, first]), expected);
    }

    #[test]
    fn test_export_names_unnamed_blessings() {
        let mut v = volume("Volume 3 – Three");
        v.edition.clear();
        v.blessings = vec![
            Blessing::new("", "mystery"),
            Blessing::new("Known", "  "),
            Blessing::new("   ", "blank item"),
        ];
        let expected = "\
The Abel Experience Volume 3: Three

Blessing 1 - mystery
Known
Blessing 3 - blank item

The Abel Experience: Three";
        assert_eq!(export_volumes(&[v]), expected);
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export_volumes(&[]), "");
    }
}
