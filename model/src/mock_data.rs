//! Built-in user directory served by the list service and loaded by the table.

use crate::User;

const MOCK_ROWS: [(&str, &str, &str); 25] = [
    ("Léa Martin", "lea.martin@example.com", "admin"),
    ("Hugo Bernard", "hugo.bernard@example.com", "user"),
    ("Chloé Dubois", "chloe.dubois@example.com", "user"),
    ("Louis Thomas", "louis.thomas@example.com", "editor"),
    ("Emma Robert", "emma.robert@example.com", "user"),
    ("Gabriel Richard", "gabriel.richard@example.com", "admin"),
    ("Manon Petit", "manon.petit@example.com", "user"),
    ("Jules Durand", "jules.durand@example.com", "editor"),
    ("Inès Leroy", "ines.leroy@example.com", "user"),
    ("Arthur Moreau", "arthur.moreau@example.com", "user"),
    ("Zoé Simon", "zoe.simon@example.com", "editor"),
    ("Raphaël Laurent", "raphael.laurent@example.com", "user"),
    ("Camille Lefebvre", "camille.lefebvre@example.com", "admin"),
    ("Nathan Michel", "nathan.michel@example.com", "user"),
    ("Sarah Garcia", "sarah.garcia@example.com", "user"),
    ("Adam David", "adam.david@example.com", "editor"),
    ("Lina Bertrand", "lina.bertrand@example.com", "user"),
    ("Lucas Roux", "lucas.roux@example.com", "user"),
    ("Jade Vincent", "jade.vincent@example.com", "admin"),
    ("Théo Fournier", "theo.fournier@example.com", "user"),
    ("Alice Morel", "alice.morel@example.com", "editor"),
    ("Noah Girard", "noah.girard@example.com", "user"),
    ("Rose Andre", "rose.andre@example.com", "user"),
    ("Enzo Mercier", "enzo.mercier@example.com", "user"),
    ("Lou Blanc", "lou.blanc@example.com", "editor"),
];

/// The fixed dataset, ids starting at 1 in insertion order.
pub fn mock_users() -> Vec<User> {
    MOCK_ROWS
        .iter()
        .zip(1..)
        .map(|(&(name, email, user_type), id)| User::new(id, name, email, user_type))
        .collect()
}
