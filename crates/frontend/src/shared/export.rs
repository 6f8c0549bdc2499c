/// Экспорт списков в Excel-совместимый CSV (UTF-8 BOM, разделитель `;`)
use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для строк таблиц, которые можно выгрузить в Excel
pub trait ExcelExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения ячеек строки в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

/// Собирает содержимое CSV-файла
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    // BOM, чтобы Excel открыл кириллицу и вьетнамский в UTF-8
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = T::headers().iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&headers.join(";"));
    csv_content.push_str("\r\n");

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(";"));
        csv_content.push_str("\r\n");
    }

    csv_content
}

/// Имя файла вида `courts_2025-06-10.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Экспортирует список и инициирует скачивание в браузере
pub fn export_to_excel<T: ExcelExportable>(data: &[T], prefix: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let filename = export_filename(prefix, chrono::Local::now().date_naive());
    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, &filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// Оборачивает ячейку в кавычки, если в ней есть `;`, кавычки или перевод строки
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        note: String,
    }

    impl ExcelExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Название", "Примечание"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), self.note.clone()]
        }
    }

    #[test]
    fn test_build_csv_with_bom_and_escaping() {
        let rows = vec![
            Row { name: "Корт 1".into(), note: "крытый".into() },
            Row { name: "A;B".into(), note: "say \"hi\"\nnow".into() },
        ];
        let csv = build_csv(&rows);
        assert!(csv.starts_with('\u{FEFF}'));
        let body = csv.trim_start_matches('\u{FEFF}');
        let expected = "Название;Примечание\r\nКорт 1;крытый\r\n\"A;B\";\"say \"\"hi\"\"\nnow\"\r\n";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid date");
        assert_eq!(export_filename("courts", date), "courts_2025-06-10.csv");
    }
}
