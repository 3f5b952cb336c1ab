// SPDX-License-Identifier: MPL-2.0
//! Results grid and match banner.

use crate::api::models::Dog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{container, image, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

use super::component::Message;
use super::photos::PhotoCache;

/// Cards per grid row.
const GRID_COLUMNS: usize = 4;

/// Orders a result page for display. Sorting never touches the wire; the
/// service returns pages in its own order and the sort field only rearranges
/// what is already on screen. Unknown fields fall back to breed order.
pub fn sort_dogs<'a>(dogs: &'a [Dog], sort_by: &str) -> Vec<&'a Dog> {
    let mut sorted: Vec<&Dog> = dogs.iter().collect();
    match sort_by {
        "Name" => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        "Age" => sorted.sort_by(|a, b| a.age.cmp(&b.age).then_with(|| a.name.cmp(&b.name))),
        "Breed Group" => sorted.sort_by(|a, b| {
            a.breed_group()
                .cmp(b.breed_group())
                .then_with(|| a.breed.cmp(&b.breed))
        }),
        _ => sorted.sort_by(|a, b| a.breed.cmp(&b.breed).then_with(|| a.name.cmp(&b.name))),
    }
    sorted
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Dogs already ordered for display.
    pub dogs: &'a [&'a Dog],
    /// The resolved match, if any.
    pub matched: Option<&'a Dog>,
    /// Photo lookup by URL; absent entries render a placeholder.
    pub photos: &'a PhotoCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::MD);

    if let Some(matched) = ctx.matched {
        column = column.push(match_banner(ctx.i18n, matched));
    }

    if ctx.dogs.is_empty() {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr("no-results-message")).size(typography::BODY_LG))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
        );
        return column.into();
    }

    for chunk in ctx.dogs.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for dog in chunk {
            row = row.push(card(ctx.i18n, dog, ctx.photos.get(&dog.img)));
        }
        column = column.push(row);
    }

    column.into()
}

fn match_banner(i18n: &I18n, matched: &Dog) -> Element<'static, Message> {
    let mut args = FluentArgs::new();
    args.set("name", matched.name.clone());

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("match-banner-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr_with("match-banner-body", &args)).size(typography::BODY));

    Container::new(content)
        .width(Length::Fixed(sizing::MATCH_BANNER_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::match_banner)
        .into()
}

fn card(i18n: &I18n, dog: &Dog, photo: Option<image::Handle>) -> Element<'static, Message> {
    let photo_element: Element<'static, Message> = match photo {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DOG_PHOTO_HEIGHT))
            .into(),
        None => Container::new(Text::new("🐾").size(typography::TITLE_LG))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DOG_PHOTO_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let mut age_args = FluentArgs::new();
    age_args.set("age", dog.age);
    let mut zip_args = FluentArgs::new();
    zip_args.set("zip", dog.zip_code.clone());

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(dog.name.clone()).size(typography::TITLE_SM))
        .push(Text::new(dog.breed.clone()).size(typography::BODY))
        .push(Text::new(i18n.tr_with("dog-age", &age_args)).size(typography::BODY_SM))
        .push(Text::new(i18n.tr_with("dog-zip", &zip_args)).size(typography::CAPTION));

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(photo_element)
            .push(details),
    )
    .width(Length::Fixed(sizing::DOG_CARD_WIDTH))
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(name: &str, breed: &str, age: u32) -> Dog {
        Dog {
            id: name.to_lowercase(),
            img: String::new(),
            name: name.to_string(),
            age,
            zip_code: "00000".to_string(),
            breed: breed.to_string(),
        }
    }

    #[test]
    fn default_sort_orders_by_breed() {
        let dogs = vec![dog("Rex", "Poodle", 2), dog("Ada", "Akita", 5)];
        let sorted = sort_dogs(&dogs, "Breed");
        assert_eq!(sorted[0].breed, "Akita");
        assert_eq!(sorted[1].breed, "Poodle");
    }

    #[test]
    fn age_sort_is_numeric_with_name_tiebreak() {
        let dogs = vec![
            dog("Zoe", "Poodle", 10),
            dog("Ada", "Akita", 2),
            dog("Bob", "Husky", 2),
        ];
        let sorted = sort_dogs(&dogs, "Age");
        assert_eq!(sorted[0].name, "Ada");
        assert_eq!(sorted[1].name, "Bob");
        assert_eq!(sorted[2].name, "Zoe");
    }

    #[test]
    fn breed_group_sort_uses_the_trailing_word() {
        let dogs = vec![
            dog("A", "Siberian Husky", 1),
            dog("B", "Norfolk Terrier", 1),
            dog("C", "Airedale Terrier", 1),
        ];
        let sorted = sort_dogs(&dogs, "Breed Group");
        // Huskies before Terriers; within Terriers, full breed name decides.
        assert_eq!(sorted[0].breed, "Siberian Husky");
        assert_eq!(sorted[1].breed, "Airedale Terrier");
        assert_eq!(sorted[2].breed, "Norfolk Terrier");
    }

    #[test]
    fn unknown_sort_field_falls_back_to_breed() {
        let dogs = vec![dog("Rex", "Poodle", 2), dog("Ada", "Akita", 5)];
        let sorted = sort_dogs(&dogs, "Temperament");
        assert_eq!(sorted[0].breed, "Akita");
    }
}
