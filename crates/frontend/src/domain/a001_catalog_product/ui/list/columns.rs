//! Колонки списка товаров и их наборы по классу экрана

use crate::shared::date_utils::format_date_str;
use crate::shared::list_utils::{format_number, CellValue};
use crate::shared::media_info::ViewportClass;
use contracts::domain::a001_catalog_product::Product;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnId {
    /// Позиция строки в загруженном списке
    Index,
    Title,
    Category,
    CreatedBy,
    CreatedAt,
    Price,
    Description,
    Actions,
    /// Псевдоколонка мобильной карточки
    Card,
}

/// Планшет и набор по умолчанию
pub const TABLET_COLUMNS: &[ColumnId] = &[
    ColumnId::Index,
    ColumnId::Title,
    ColumnId::Category,
    ColumnId::CreatedAt,
    ColumnId::Price,
    ColumnId::Actions,
];

/// Десктоп: плюс автор и описание
pub const DESKTOP_COLUMNS: &[ColumnId] = &[
    ColumnId::Index,
    ColumnId::Title,
    ColumnId::Category,
    ColumnId::CreatedBy,
    ColumnId::CreatedAt,
    ColumnId::Price,
    ColumnId::Description,
    ColumnId::Actions,
];

pub const MOBILE_COLUMNS: &[ColumnId] = &[ColumnId::Card];

/// Поля, которые выводятся в мобильной карточке
pub const CARD_FIELDS: &[ColumnId] = &[
    ColumnId::Title,
    ColumnId::Category,
    ColumnId::CreatedBy,
    ColumnId::CreatedAt,
    ColumnId::Price,
    ColumnId::Description,
];

/// Все колонки с данными (для вычисления фильтров)
pub const ACCESSOR_COLUMNS: &[ColumnId] = &[
    ColumnId::Title,
    ColumnId::Category,
    ColumnId::CreatedBy,
    ColumnId::CreatedAt,
    ColumnId::Price,
    ColumnId::Description,
];

pub fn column_set(class: ViewportClass) -> &'static [ColumnId] {
    match class {
        ViewportClass::Desktop => DESKTOP_COLUMNS,
        ViewportClass::Tablet => TABLET_COLUMNS,
        ViewportClass::Mobile => MOBILE_COLUMNS,
    }
}

impl ColumnId {
    pub fn key(&self) -> &'static str {
        match self {
            ColumnId::Index => "index",
            ColumnId::Title => "title",
            ColumnId::Category => "category_name",
            ColumnId::CreatedBy => "created_by_name",
            ColumnId::CreatedAt => "created_at",
            ColumnId::Price => "price",
            ColumnId::Description => "description",
            ColumnId::Actions => "actions",
            ColumnId::Card => "card",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            ColumnId::Index => "#",
            ColumnId::Title => "Title",
            ColumnId::Category => "Category",
            ColumnId::CreatedBy => "Created By",
            ColumnId::CreatedAt => "Created At",
            ColumnId::Price => "Price",
            ColumnId::Description => "Description",
            ColumnId::Actions => "Actions",
            ColumnId::Card => "Products",
        }
    }

    /// Колонка с данными товара (в отличие от служебных)
    pub fn is_accessor(&self) -> bool {
        ACCESSOR_COLUMNS.contains(self)
    }

    pub fn can_sort(&self) -> bool {
        self.is_accessor()
    }

    pub fn can_filter(&self) -> bool {
        self.is_accessor()
    }

    /// Сырое значение для фильтров, сортировки и фасетов
    pub fn value(&self, product: &Product) -> CellValue {
        match self {
            ColumnId::Title => CellValue::Text(product.title.clone()),
            ColumnId::Category => CellValue::Text(product.category.name.clone()),
            ColumnId::CreatedBy => CellValue::Text(product.created_by.name.clone()),
            ColumnId::CreatedAt => CellValue::Text(product.created_at.clone()),
            ColumnId::Price => CellValue::Number(product.price),
            ColumnId::Description => product
                .description
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Empty),
            ColumnId::Index | ColumnId::Actions | ColumnId::Card => CellValue::Empty,
        }
    }

    /// Текст ячейки для отображения
    pub fn display(&self, product: &Product, index: usize) -> String {
        match self {
            ColumnId::Index => index.to_string(),
            ColumnId::Title => product.title.clone(),
            ColumnId::Category => product.category.name.to_uppercase(),
            ColumnId::CreatedBy => product.created_by.name.clone(),
            ColumnId::CreatedAt => format_date_str(&product.created_at),
            ColumnId::Price => format_price(product.price),
            ColumnId::Description => product
                .description_text()
                .unwrap_or("No description.")
                .to_string(),
            ColumnId::Actions | ColumnId::Card => String::new(),
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("$ {}", format_number(price))
}
