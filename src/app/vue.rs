// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus)
// - Indicateur de grammaire en direct (is_well_formed sur la saisie)
// - Pavé : chiffres, '.', opérateurs, les trois paires de parenthèses
//
// Note : PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use calculatrice_infixe::noyau::reglages::PRECISION_MAX;
use calculatrice_infixe::noyau::{eval_expression, is_well_formed};

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice infixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2(3+4), [1.5-2]/4, -{2^10}")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        self.ui_indicateur(ui);

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Division :");
            let mut p = self.precision;
            let resp = ui
                .add(
                    egui::DragValue::new(&mut p)
                        .speed(1)
                        .range(1..=PRECISION_MAX)
                        .suffix(" chiffres"),
                )
                .on_hover_text("Chiffres significatifs d’un quotient non exact");
            if resp.changed() {
                self.set_precision(p);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for (o, f) in [("(", ")"), ("{", "}"), ("[", "]")] {
                self.bouton_insert(ui, o);
                self.bouton_insert(ui, f);
            }

            ui.separator();

            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Grammaire en direct : même garde que le pipeline (trim seulement).
    fn ui_indicateur(&self, ui: &mut egui::Ui) {
        let brute = self.entree.trim();
        if brute.is_empty() {
            return;
        }

        if is_well_formed(brute) {
            ui.colored_label(egui::Color32::from_rgb(40, 160, 70), "✔ bien formée");
        } else {
            ui.colored_label(ui.visuals().warn_fg_color, "✘ mal formée");
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for t in rangee {
                        self.bouton_insert(ui, t);
                    }
                    if rangee[0] == "7" {
                        self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Supprime);
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        } else {
            ui.monospace("indisponible");
        }

        ui.add_space(6.0);

        ui.label("Lecture décimale :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Brute", "demarche_brute", &self.demarche.brute);
                Self::champ_demarche(ui, "Canonique", "demarche_canonique", &self.demarche.canonique);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.add(egui::Label::new(egui::RichText::new(contenu).monospace()).wrap());
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Supprime => self.supprime_dernier(),
            }
        }
    }

    /// Les symboles sont insérés tels quels : la grammaire refuse les espaces.
    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if resp.clicked() {
            self.entree.push_str(symbole);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat + démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match eval_expression(&self.entree, &self.reglages()) {
            Ok((_, d)) => {
                let d_ui = Demarche {
                    brute: d.brute,
                    canonique: d.canonique,
                    note: d.note,
                };
                self.set_resultats(d.resultat, d.lecture, d_ui);
            }
            Err(e) => {
                log::warn!("évaluation refusée: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Supprime,
}
