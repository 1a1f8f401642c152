use crate::cards::{Attribute, Card};
use crate::game_logic::{compare_attribute, dual_points, Outcome};
use crate::game_state::{next_stage, MenuChoice, Stage};
use crate::input::{prompt_line, prompt_parsed, read_line, InputError};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use termion::{color, style};

/// Line-oriented terminal front end. Generic over the reader/writer pair
/// so sessions can be scripted in tests.
pub struct Ui<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Ui<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs a full session: card registration, then the menu loop until
    /// the player quits. Errors only if the input stream dies.
    pub fn run(&mut self) -> Result<(), InputError> {
        self.title_banner()?;
        writeln!(self.output, "Vamos cadastrar as cartas das cidades!")?;
        let first = self.create_card(1)?;
        let second = self.create_card(2)?;

        self.section("CARTAS CADASTRADAS")?;
        self.display_card(&first, 1)?;
        writeln!(self.output)?;
        self.display_card(&second, 2)?;

        let mut stage = next_stage(Stage::Setup, None);
        while stage == Stage::MenuLoop {
            self.main_menu()?;
            let value: i64 =
                prompt_parsed(&mut self.input, &mut self.output, "Escolha uma opção: ")?;
            let choice = u8::try_from(value).ok().and_then(MenuChoice::from_input);

            match choice {
                Some(MenuChoice::SingleComparison) => self.single_comparison(&first, &second)?,
                Some(MenuChoice::DualComparison) => self.dual_comparison(&first, &second)?,
                Some(MenuChoice::Quit) => self.farewell()?,
                None => writeln!(self.output, "\nOpção inválida! Tente novamente.")?,
            }
            if choice != Some(MenuChoice::Quit) {
                self.pause()?;
            }
            stage = next_stage(stage, choice);
        }
        Ok(())
    }

    fn create_card(&mut self, ordinal: u8) -> Result<Card, InputError> {
        self.subsection(&format!("CADASTRO DA CARTA {ordinal}"))?;

        let region = prompt_line(&mut self.input, &mut self.output, "Estado: ")?;
        let code = prompt_line(&mut self.input, &mut self.output, "Código da carta: ")?;
        let city_name = prompt_line(&mut self.input, &mut self.output, "Nome da cidade: ")?;
        let population = prompt_parsed(&mut self.input, &mut self.output, "População: ")?;
        let area = prompt_parsed(&mut self.input, &mut self.output, "Área (km²): ")?;
        let gdp = prompt_parsed(&mut self.input, &mut self.output, "PIB (milhões): ")?;
        let landmarks = prompt_parsed(
            &mut self.input,
            &mut self.output,
            "Número de pontos turísticos: ",
        )?;

        writeln!(self.output, "Carta {ordinal} cadastrada com sucesso!")?;
        Ok(Card::new(
            region, code, city_name, population, area, gdp, landmarks,
        ))
    }

    fn display_card(&mut self, card: &Card, ordinal: u8) -> Result<(), InputError> {
        writeln!(self.output, "CARTA {ordinal} - {}", card.code)?;
        writeln!(self.output, "Estado: {}", card.region)?;
        writeln!(self.output, "Cidade: {}", card.city_name)?;
        writeln!(self.output, "População: {} habitantes", card.population)?;
        writeln!(self.output, "Área: {:.2} km²", card.area)?;
        writeln!(self.output, "PIB: R$ {:.2} milhões", card.gdp)?;
        writeln!(self.output, "Pontos Turísticos: {}", card.landmarks)?;
        writeln!(
            self.output,
            "Densidade Populacional: {:.2} hab/km²",
            card.density()
        )?;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<(), InputError> {
        self.section("MENU PRINCIPAL")?;
        writeln!(self.output, "1. Comparar um atributo")?;
        writeln!(self.output, "2. Comparar dois atributos")?;
        writeln!(self.output, "3. Sair")?;
        writeln!(self.output, "========================")?;
        Ok(())
    }

    fn attribute_menu(&mut self) -> Result<(), InputError> {
        self.section("ATRIBUTOS DISPONÍVEIS")?;
        for attribute in Attribute::iter() {
            writeln!(
                self.output,
                "{}. {}",
                attribute as u8,
                attribute.menu_label()
            )?;
        }
        writeln!(self.output, "==============================")?;
        Ok(())
    }

    /// Renders the attribute menu and loops until the pick is in range.
    fn choose_attribute(&mut self, prompt: &str) -> Result<Attribute, InputError> {
        loop {
            self.attribute_menu()?;
            let choice: i64 =
                prompt_parsed(&mut self.input, &mut self.output, &format!("{prompt}: "))?;
            match u8::try_from(choice).ok().and_then(Attribute::from_choice) {
                Some(attribute) => return Ok(attribute),
                None => writeln!(self.output, "Opção inválida! Escolha entre 1 e 5.")?,
            }
        }
    }

    fn single_comparison(&mut self, first: &Card, second: &Card) -> Result<(), InputError> {
        self.section("COMPARAÇÃO SIMPLES")?;
        let attribute = self.choose_attribute("Escolha o atributo para comparação")?;
        let outcome = compare_attribute(first, second, attribute);

        self.subsection("RESULTADO DA COMPARAÇÃO")?;
        writeln!(self.output, "Atributo comparado: {attribute}")?;
        writeln!(
            self.output,
            "Carta 1 ({}): {:.2}",
            first.city_name,
            attribute.value(first)
        )?;
        writeln!(
            self.output,
            "Carta 2 ({}): {:.2}",
            second.city_name,
            attribute.value(second)
        )?;

        match outcome {
            Outcome::FirstWins => self.announce_winner(first)?,
            Outcome::SecondWins => self.announce_winner(second)?,
            Outcome::Tie => self.announce(
                "🤝 EMPATE! As duas cidades têm o mesmo valor para este atributo.",
            )?,
        }
        Ok(())
    }

    fn dual_comparison(&mut self, first: &Card, second: &Card) -> Result<(), InputError> {
        self.section("COMPARAÇÃO DUPLA")?;
        let attribute1 = self.choose_attribute("Escolha o primeiro atributo")?;
        let attribute2 = loop {
            let pick = self.choose_attribute("Escolha o segundo atributo")?;
            if pick != attribute1 {
                break pick;
            }
            writeln!(
                self.output,
                "Você deve escolher dois atributos diferentes!"
            )?;
        };

        self.subsection("COMPARAÇÃO DETALHADA")?;
        self.attribute_breakdown(first, second, attribute1)?;
        self.attribute_breakdown(first, second, attribute2)?;

        let (points1, points2) = dual_points(first, second, attribute1, attribute2);
        self.subsection("RESULTADO FINAL")?;
        writeln!(
            self.output,
            "Pontuação da Carta 1 ({}): {points1} pontos",
            first.city_name
        )?;
        writeln!(
            self.output,
            "Pontuação da Carta 2 ({}): {points2} pontos",
            second.city_name
        )?;

        if points1 > points2 {
            self.announce_winner(first)?;
        } else if points2 > points1 {
            self.announce_winner(second)?;
        } else {
            self.announce("🤝 EMPATE TÉCNICO!")?;
        }
        Ok(())
    }

    fn attribute_breakdown(
        &mut self,
        first: &Card,
        second: &Card,
        attribute: Attribute,
    ) -> Result<(), InputError> {
        writeln!(self.output, "\n{attribute}:")?;
        writeln!(
            self.output,
            "  {} ({}): {:.2}",
            first.code,
            first.city_name,
            attribute.value(first)
        )?;
        writeln!(
            self.output,
            "  {} ({}): {:.2}",
            second.code,
            second.city_name,
            attribute.value(second)
        )?;
        let winner = match compare_attribute(first, second, attribute) {
            Outcome::FirstWins => first.code.as_str(),
            Outcome::SecondWins => second.code.as_str(),
            Outcome::Tie => "Empate",
        };
        writeln!(self.output, "  Vencedor: {winner}")?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), InputError> {
        write!(self.output, "\nPressione ENTER para continuar...")?;
        self.output.flush()?;
        read_line(&mut self.input)?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<(), InputError> {
        writeln!(self.output, "\nObrigado por jogar Super Trunfo - Cidades!")?;
        writeln!(self.output, "Desenvolvido pela Equipe MateCheck")?;
        Ok(())
    }

    fn announce_winner(&mut self, card: &Card) -> Result<(), InputError> {
        writeln!(
            self.output,
            "{}🏆 VENCEDOR: {} - {}!{}",
            color::Fg(color::LightGreen),
            card.code,
            card.city_name,
            color::Fg(color::Reset),
        )?;
        Ok(())
    }

    fn announce(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(
            self.output,
            "{}{message}{}",
            color::Fg(color::LightCyan),
            color::Fg(color::Reset),
        )?;
        Ok(())
    }

    fn title_banner(&mut self) -> Result<(), InputError> {
        writeln!(
            self.output,
            "{}{}=== SUPER TRUNFO - CIDADES (NÍVEL MESTRE) ==={}{}\n",
            style::Bold,
            color::Fg(color::LightYellow),
            color::Fg(color::Reset),
            style::Reset,
        )?;
        Ok(())
    }

    fn section(&mut self, label: &str) -> Result<(), InputError> {
        writeln!(
            self.output,
            "\n{}=== {label} ==={}",
            color::Fg(color::LightYellow),
            color::Fg(color::Reset),
        )?;
        Ok(())
    }

    fn subsection(&mut self, label: &str) -> Result<(), InputError> {
        writeln!(self.output, "\n--- {label} ---")?;
        Ok(())
    }
}
