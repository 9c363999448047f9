// engine/src/policy/first_move_table.rs
#![forbid(unsafe_code)]

// Generated by `box-player --precompute-first-moves`. Do not edit by hand.
//
// One three-character placement code (row letter, column letter,
// orientation letter) per (secret color, tile permutation) key. Keys are
// ordered by color 1..6, then by lexicographic rank of the permutation;
// see `policy::first_move` for the relabeling and indexing scheme.

pub(super) const PACKED_PLACEMENTS: &str = "ClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvClvBgvClvGjhClvClvClvGjhClvGjhClvClvClvGjhClvFhhClvClvClvClvClvClvClvClvClvGjhClvGjhCmvClvClvBgvClvGjhClvClvClvDkvClvGjhClvClvClvClvClvClvClvClvClvGjhClvGjhClvClvClvBgvClvGjhClvClvClvDkvClvGjhClvClvClvClvClvClvClvClvClvGjhClvGjhClvClvClvClvClvGjhClvClvClvClvClvGjh\
     BlvBlvBlvDnvBlvBlvBlvBgvDnvBgvBlvBlvBlvBlvBlvBlvBlvBlvDkvDkvDkvDkvDkvDkvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivEjvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmv\
     DnvFlhFlhBgvDlvDnvBlvBlvGjhGjhGjhGjhBlvBlvBlvGjhFihGjhGjhFghGjhGjhGjhGjhEkvEkvEkvEkvEkvEkvEivEivFlhCmvDivCmvEivEivFlhCmvDivCmvEivEivDkvCmvBmvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmv\
     FlhBgvFlhBgvFihFihBlvBlvGjhGjhGjhGjhBlvBlvBlvGjhBlvGjhFihDkvGjhGjhFlhGjhEkvEkvEkvEkvEkvEkvEivEivDkvCmvDivCmvEivEivFlhCmvDivCmvEivEivDivCmvFlhCmvEkvEkvEkvEkvEkvEkvEivEivFlhCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmv\
     ClvBgvCmvDkvDnvClvBlvBlvBlvGjhBlvGjhBlvBlvBlvGjhBlvGjhHbhDkvGjhGjhGjhGjhEkvEkvEkvEkvEkvEkvEivEivCmvCmvDivCmvEivEivDkvCmvDivCmvEivEivDivCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivDkvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivEjvCmvDivCmvEivEivCmvCmvDivCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmv\
     BmvBmvFlhFlhBmvFlhBlvDjvGjhGjhGjhGjhBlvDjvGjhGjhGjhGjhDjvDjvGjhGjhGjhGjhEkvEkvEkvEkvEkvEkvEivEivDkvCmvDivCmvEivEivBmvCmvBmvCmvEivEivDivCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvBmvCmvEivEivBmvCmvBmvCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEivEivDkvCmvDkvCmvEkvEkvEkvEkvEkvEkvEivEivBmvCmvDkvCmvEivEivDkvCmvEjvCmvEivEivBmvCmvBmvCmv\
     FkhEjvEjvEjvBkvEjvGkhEjvGkhEjvGkhDmvGkhGkhGkhBkvGkhFhhGkhGkhGkhEjvGkhFhhEkvEkvEkvEkvEkvEkvEivEivGjhFdhGjhFdhEivEivFkhCnvFkhCnvEivEivFehBivGjhFdhEkvEkvEkvEkvEkvEkvEivEivFehFdhDlvFdhEivEivEgvCnvDlvCnvEivEivEgvFdhDlvCjvEkvEkvEkvEkvEkvEkvEivEivDlvBivDlvFdhEivEivGjhDmvGjhCnvEivEivEgvFdhDlvBivEkvEkvEkvEkvEkvEkvEivEivFjvBivDlvBivEivEivFjvCnvGjhCnvEivEivEgvCnvDlvCnv\
     CmvCmvCkvCkvCmvCkvDfvClvCkvClvCkvClvCmvCmvCmvCmvCkvCmvClvDfvCmvCmvCkvCmvCkvCkvCkvCkvCkvCkvCkvCkvGjhCkvGjhCkvCkvCkvGjhCkvGjhCkvCkvCkvGjhGjhGjhGjhCmvCmvCkvCmvCkvCmvCkvCkvGjhCkvGjhCkvCkvCmvGjhGjhGjhCkvCkvCmvGjhGjhGjhGjhCmvCmvCkvCmvCkvCmvCkvCkvGjhCkvGjhCkvCkvClvGjhGjhGjhCkvCkvCmvGjhGjhGjhGjhBhvDfvCkvCmvCkvCmvCkvCkvGjhCkvGjhCkvCkvClvGjhGjhGjhCkvCkvCmvGjhGjhGjhCkv\
     EkvEkvEkvEkvEkvEkvEivEivClvClvDjvClvEivEivDlvClvEgvClvEivEivDlvClvDlvClvBkvDkvFhhDkvFhhDjvBkvDkvGjhDkvGjhBkvFhhFhhGjhDkvFhhFhhFhhDkvGjhDkvFhhDkvEivEivDlvClvDlvClvEkvEkvEkvEkvEkvEkvDlvClvEivEivClvDlvDlvClvEivEivClvDlvEivEivDlvClvEgvClvEkvEkvEkvEkvEkvEkvDnvClvEivEivClvGjhDlvClvEivEivClvDlvEivEivDlvClvDlvClvEkvEkvEkvEkvEkvEkvClvClvEivEivClvGjhEgvClvEivEivClvDlv\
     EkvEkvEkvEkvEkvEkvEivEivFkhClvEgvClvEivEivEgvClvEgvClvEivEivEgvClvFhhClvEhvDkvFhhDkvFhhEhvBkvEjvGjhEjvGjhBkvFhhFhhGkhGkhFhhGkhFhhDkvGkhDkvFhhGkhEivEivFhhClvGnhClvEkvEkvEkvEkvEkvEkvFkhClvEivEivClvDjvFhhClvEivEivClvGjhEivEivEgvClvEgvClvEkvEkvEkvEkvEkvEkvEgvClvEivEivClvGjhDkvClvEivEivClvGjhEivEivEgvClvDlvClvEkvEkvEkvEkvEkvEkvEgvClvEivEivClvGjhFhhClvEivEivClvGjh\
     EkvEkvEkvEkvEkvEkvEivEivFjvClvFkhClvEivEivFjvClvClvClvEivEivEgvClvDlvClvEhvDkvEfvDkvFhhFhhEjvEjvFkhEjvGjhEjvEjvDkvGkhEjvGjhGkhDkvFhhGkhGkhGjhGkhEivEivDjvClvDjvClvEkvEkvEkvEkvEkvEkvClvClvEivEivClvDjvDkvClvEivEivClvGjhEivEivEgvClvDjvClvEkvEkvEkvEkvEkvEkvDlvClvEivEivClvDlvDlvClvEivEivClvGjhEivEivEgvClvDlvClvEkvEkvEkvEkvEkvEkvDlvClvEivEivClvDlvClvClvEivEivClvGjh\
     EkvEkvEkvEkvEkvEkvEivEivBhvClvFkhClvEivEivBhvClvDkvClvEivEivEgvClvFehClvDkvDkvDkvDkvFhhFhhEjvDkvGjhDkvGjhEjvDkvDkvDgvGkhGjhGkhFhhFhhGkhGkhGjhGkhEivEivFehClvFehClvEkvEkvEkvEkvEkvEkvDkvClvEivEivClvGjhFkhClvEivEivClvFkhEivEivEgvClvFehClvEkvEkvEkvEkvEkvEkvEgvClvEivEivClvFehEgvClvEivEivClvDjvEivEivEgvClvEgvClvEkvEkvEkvEkvEkvEkvEgvClvEivEivClvGjhDkvClvEivEivClvGjh\
     EkvEkvEkvEkvEkvEkvEivEivEhvGkhEhvGkhEivEivBkvGkhEhvGkhEivEivBkvGkhEhvGkhDfvDlvDlvDfvDlvDfvDfvDfvDfvDnvDfvDnvFghDfvDfvDlvFghDlvDlvFghDfvDlvDfvDlvEivEivEhvGkhEhvGkhEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhEhvEhvGkhEivEivGkhBkvEivEivBkvGkhEhvGkhEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhEhvEhvGkhEivEivGkhDlvEivEivBkvGkhEhvGkhEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhEhvEhvGkhEivEivGkhDlv\
     EkvEkvEkvEkvEkvEkvEivEivDgvGkhDgvGkhEivEivDgvGkhEhvGkhEivEivDgvGkhEhvGkhDlvDlvFghDlvDlvFghDfvDfvDfvDnvDfvDnvFghEgvDlvDlvFghDlvDlvFghDlvDlvFghDlvEivEivEhvGkhEhvGkhEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhEhvEhvGkhEivEivGkhEhvEivEivDgvGkhEhvGkhEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhDmvEhvGkhEivEivGkhDgvEivEivDgvGkhEhvGkhEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhDmvEhvGkhEivEivGkhDnv\
     CkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkvCkv\
     EivEivEhvGkhEhvGkhEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhElvDgvGkhEivEivGkhFhhEivEivEhvCkvEhvCkvEkvEkvEkvEkvEkvEkvEhvGkhEivEivGkhElvEhvGkhEivEivGkhElvEgvEgvFghFghCkvFghEhvEhvDfvDfvEgvEgvFghEgvFghEgvFghFghFghFghFghFghFghFghEhvCkvEivEivCkvEhvEhvGkhEivEivGkhEhvEkvEkvEkvEkvEkvEkvGkhHbhGkhDgvEivEivEhvCkvEivEivCkvEhvEhvGkhEivEivGkhEhvEkvEkvEkvEkvEkvEkvCkvEhvGkhEhvEivEiv\
     EivEivDgvGkhEhvGkhEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhEhvEhvGkhEivEivGkhDlvEivEivDgvCkvEhvCkvEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhDgvEhvGkhEivEivGkhDgvFghEgvDfvDlvFghDlvDlvEgvDfvDlvDfvDlvDfvDfvDfvDfvDfvDfvDfvDlvFghDlvDfvDfvEhvCkvEivEivCkvEhvEhvGkhEivEivGkhEhvEkvEkvEkvEkvEkvEkvGkhEhvGkhEhvEivEivEhvCkvEivEivCkvDlvEhvGkhEivEivGkhDgvEkvEkvEkvEkvEkvEkvCkvEhvGkhDgvEivEiv\
     EivEivDgvGkhEhvGkhEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhEhvEhvGkhEivEivGkhBkvEivEivDgvCkvEhvCkvEkvEkvEkvEkvEkvEkvDgvGkhEivEivGkhFjhEhvGkhEivEivGkhDgvEgvFghDfvDfvDfvFghEgvDfvDfvDfvDfvDfvDfvDfvDfvDfvDfvDfvDfvFghDfvFghDfvDfvEhvCkvEivEivCkvEhvEhvGkhEivEivGkhEhvEkvEkvEkvEkvEkvEkvCkvEhvGkhEhvEivEivEhvCkvEivEivCkvBkvEhvGkhEivEivGkhDgvEkvEkvEkvEkvEkvEkvCkvEhvGkhDgvEivEiv\
     EivEivDnvCivDhvCivEkvEkvEkvEkvEkvEkvDnvCivEivEivCivEmvDfvCivEivEivCivElvEivEivDhvCivFihCivEkvEkvEkvEkvEkvEkvFihCivEivEivCivFihFihCivEivEivCivDhvElvDmvElvElvElvElvBivDmvBivDmvDmvDmvElvElvElvDmvElvElvElvElvDmvDmvElvElvDnvCivEivEivCivFihDnvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEivDfvCivEivEivCivDhvDhvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEiv\
     EivEivDhvCivDhvCivEkvEkvEkvEkvEkvEkvDnvCivEivEivCivEmvDnvCivEivEivCivElvEivEivDhvCivDhvCivEkvEkvEkvEkvEkvEkvDhvCivEivEivCivEmvDhvCivEivEivCivEmvElvDmvElvElvElvElvBivDmvBivDmvDmvDmvElvDmvElvDmvElvElvElvElvDmvDmvElvElvDnvCivEivEivCivCivDnvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEivDnvCivEivEivCivEmvDhvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEiv\
     EivEivDnvCivDhvCivEkvEkvEkvEkvEkvEkvDnvCivEivEivCivEmvEmvCivEivEivCivEmvEivEivDnvCivFihCivEkvEkvEkvEkvEkvEkvFihCivEivEivCivFihFihCivEivEivCivDnvEhvEhvElvElvElvElvEhvEhvElvElvElvElvElvElvElvElvElvElvElvElvElvElvElvElvFihCivEivEivCivFihDnvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivDnvCivDnvEivEivFihCivEivEivCivDnvFihCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEiv\
     GehGehGehGehGehCivGehGehGehGehGehCivGehGehGehGehCivCivGehGehGehGehGehGehGehGehGehGehGehCivGehGehGehGehGehCivGehGehGehGehCivCivGehGehGehGehGehGehGehGehGehGehGehCivGehGehGehGehGehCivGehGehGehGehCivCivGehGehGehGehGehGehGehGehGehGehCivCivGehGehGehGehCivCivGehGehGehGehCivCivGehGehCivCivCivCivGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGehGeh\
     DfvCivEivEivCivFihDhvCivEivEivCivDhvEkvEkvEkvEkvEkvEkvCivEmvCivDfvEivEivDfvCivEivEivCivFghDhvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEivDhvCivEivEivCivDhvDhvCivEivEivCivFihEkvEkvEkvEkvEkvEkvCivDhvCivFihEivEivElvEhvElvElvElvElvBivFhhElvElvElvElvDhvDhvDfvBivDhvBivHbhElvElvElvElvElvCivFihCivDnvEivEivCivFihCivDnvEivEivCivDnvCivDnvEivEivEkvEkvEkvEkvEkvEkv\
     DfvCivEivEivCivDhvDhvCivEivEivCivDhvEkvEkvEkvEkvEkvEkvCivEmvCivDfvEivEivDfvCivEivEivCivEmvDhvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivFihCivDnvEivEivDhvCivEivEivCivDhvDhvCivEivEivCivDnvEkvEkvEkvEkvEkvEkvCivDhvCivFihEivEivElvEhvDgvDmvElvElvElvEhvDgvFfhElvElvDhvDmvDfvDmvDmvDmvDmvElvElvElvDmvDmvCivFihCivDnvEivEivCivFihCivDnvEivEivCivDnvCivDnvEivEivEkvEkvEkvEkvEkvEkv\
     FehCgvEivEivCivBivGehDnvEivEivCgvElvEkvEkvEkvEkvEkvEkvCivBivCivBivEivEivEjvCivEivEivCivFhhGehCgvEivEivCgvElvEkvEkvEkvEkvEkvEkvCivFhhCivEjvEivEivGehCivEivEivCivFhhGehCgvEivEivCivEjvEkvEkvEkvEkvEkvEkvCivFhhCivEjvEivEivGehChvFkhFehDhvFehFehDhvDhvFjvDhvDjvEmvEmvGfhFjvEmvEmvDhvFehDfvChvEmvDhvGfhGfhGfhGfhEivEivGfhGfhGfhFehEivEivGfhGehGfhGehEivEivEkvEkvEkvEkvEkvEkv\
     EjvCgvEivEivCivDivEjvChvEivEivCgvDivEkvEkvEkvEkvEkvEkvCivDivCivEjvEivEivBivCgvEivEivCivFhhGehCgvEivEivBlvDivEkvEkvEkvEkvEkvEkvCivFhhCivEjvEivEivGehCivEivEivCivFhhGehCgvEivEivCivDivEkvEkvEkvEkvEkvEkvCivFhhCivDivEivEivGehDjvDhvEmvDhvGbhFkhDhvFjvBlvDhvFkhEmvEmvFjvBlvEmvEmvDhvFhhChvDivEmvEmvGfhGfhGfhGfhEivEivGfhGfhGfhGfhEivEivGfhGehGfhDmvEivEivEkvEkvEkvEkvEkvEkv\
     EjvCivEivEivCivDivGehCgvEivEivCgvDivEkvEkvEkvEkvEkvEkvCivFhhCivEjvEivEivEjvCivEivEivCivDjvGehDnvEivEivDnvDivEkvEkvEkvEkvEkvEkvCivDivCivDivEivEivGehCivEivEivCivFhhGehCgvEivEivCivFhhEkvEkvEkvEkvEkvEkvCivDivCivFhhEivEivFehEmvDhvFehEmvDjvGehDhvDhvFehDhvFehEmvEmvEmvEmvEmvEmvDhvDivEmvFehDhvEmvGfhFhhGfhGfhEivEivGfhFhhGfhGfhEivEivGfhGehGfhGehEivEivEkvEkvEkvEkvEkvEkv\
     EjvChvEivEivCgvDivBivCgvEivEivCgvDivEkvEkvEkvEkvEkvEkvCgvFhhChvDivEivEivDgvChvEivEivCgvElvEjvCgvEivEivCgvDivEkvEkvEkvEkvEkvEkvCgvDivChvDivEivEivFhhCgvEivEivCgvFhhFhhCgvEivEivCgvFhhEkvEkvEkvEkvEkvEkvCgvFhhCgvFhhEivEivDhvEmvGfhChvEmvDjvDhvFhhGfhDivDhvFkhDhvDhvDhvFkhDhvEmvDivDhvFhhEmvChvDivGfhFhhGfhGfhEivEivGfhFhhGfhGfhEivEivGfhGfhGfhGfhEivEivEkvEkvEkvEkvEkvEkv\
     FlhChvFlhChvChvChvCfvChvBkvChvChvChvCfvChvDgvChvChvChvChvChvChvChvChvChvFlhChvFlhChvChvChvBkvChvBkvChvChvChvFlhChvCfvChvChvChvChvChvChvChvChvChvCfvChvFlhChvChvChvFlhChvBkvChvChvChvFlhChvCfvChvChvChvChvChvChvChvChvChvCfvChvCfvChvChvChvCjvChvCfvChvChvChvBkvChvCfvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChvChv\
     CivDivCivEjvEivEivCivDivCivEjvEivEivGfhGehGfhEjvEivEivEkvEkvEkvEkvEkvEkvCivBivCivBivEivEivGfhDivCivDivEivEivGfhDivGfhGehEivEivEkvEkvEkvEkvEkvEkvCivFhhCivEjvEivEivGfhDivCivEjvEivEivGfhGehGfhGehEivEivEkvEkvEkvEkvEkvEkvCivGehCivGehEivEivGfhGehCivGehEivEivGfhGehCivGehEivEivEkvEkvEkvEkvEkvEkvDhvDjvGfhDjvGfhDhvDhvGfhGfhGfhGfhFkhDhvGfhDhvFehDhvGfhGfhGfhGfhDjvGfhGfh\
     ChvBhvChvDfvEivEivChvBhvChvFdhEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvFdhEivEivChvBhvChvChvEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvDfvChvFdhEivEivChvBhvChvCgvEivEivCgvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvGfhChvGfhEivEivChvBhvChvBhvEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvEjvFdhEjvDivEjvFdhDivFdhEjvCgvEjvEjvDivFdhEjvDivEjvEjvDivDivDivDivDivCgv\
     ChvBhvChvFdhEivEivChvBhvChvBmvEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvDhvEivEivChvDivChvBgvEivEivChvGfhChvBhvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvFghEivEivChvDivChvFdhEivEivChvFghChvBhvEivEivEkvEkvEkvEkvEkvEkvChvGfhChvGfhEivEivChvGfhChvGfhEivEivChvGfhChvGfhEivEivEkvEkvEkvEkvEkvEkvDkvDkvDkvDkvDkvDkvDivDivDivDivDivDivDivDkvDivBgvDivDivDivDivDivBgvDivDiv\
     ChvDfvChvBmvEivEivChvBhvChvBmvEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvDfvEivEivChvDivChvBgvEivEivChvFihChvDjvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvDfvEivEivChvDivChvBgvEivEivChvHbhChvDjvEivEivEkvEkvEkvEkvEkvEkvChvFghChvBhvEivEivChvGfhChvGfhEivEivChvGfhChvGfhEivEivEkvEkvEkvEkvEkvEkvDkvDkvDkvDkvDkvDkvDivBgvDivDivDivBgvDivDkvDivDivDivBgvDivDivDivDivDivDiv\
     ChvBmvChvBmvEivEivChvBhvChvDivEivEivChvBhvChvBhvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvFghEivEivChvDivChvFdhEivEivChvDivChvDjvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvChvEivEivChvDivChvFdhEivEivChvDivChvDjvEivEivEkvEkvEkvEkvEkvEkvChvBhvChvBhvEivEivChvFdhChvGfhEivEivChvGfhChvGfhEivEivEkvEkvEkvEkvEkvEkvDkvDkvDkvDkvDkvDkvDivFdhDivBgvDivDivDivDivDivDivDivDivDivDivDivDivDivBgv\
     BmvGfhGfhGfhEivEivGfhGfhGfhGfhEivEivBmvGfhBmvGfhEivEivEkvEkvEkvEkvEkvEkvGfhGfhGfhGfhEivEivGfhGfhGfhGfhEivEivDivGfhChvGfhEivEivEkvEkvEkvEkvEkvEkvGfhGfhGfhGfhEivEivFhhGfhGfhGfhEivEivDivGfhChvGfhEivEivEkvEkvEkvEkvEkvEkvGfhGfhGfhGfhEivEivGfhGfhGfhGfhEivEivGfhGfhGfhGfhEivEivEkvEkvEkvEkvEkvEkvDkvDkvDkvDkvDkvDkvDivDivDivBgvDivDivDivDivDivDivDivEjvDivDivDivDivDivBgv\
     CgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgvCgv";

pub(super) const ENTRY_COUNT: usize = 4320;
