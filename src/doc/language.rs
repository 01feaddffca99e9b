/*!
# The Pikachu Language

A Pikachu program is a text file. Every line holds one command and every
command is spelled with three words: `pi`, `pika` and `pikachu`. Case
and surrounding whitespace don't matter. Blank lines are not allowed,
nor is the same word three times in a row.

There are two stacks of integers. `pi pikachu` is the first, and the only
one that receives program input. `pika pikachu` is the second. A command
that works on one stack ends with the stack's name.

## Commands on one stack

Shown here for `pi pikachu`. Write `pika pikachu` at the end instead
to use the other stack.

| Command | Effect |
|---|---|
| `pi pikachu` | Pop. |
| `pi pi pikachu` | Push 1. Any 3 word line not starting with `pikachu`. |
| `pikachu pi pikachu` | Pop b then a, push a / b. |
| `pi pika pi pikachu` | Pop b then a, push a + b. |
| `pika pi pi pikachu` | Pop b then a, push a - b. |
| `pi pikachu pi pikachu` | Pop b then a, push a * b. |
| `pika pikachu pi pikachu` | Pop and print as a number. |
| `pikachu pikachu pi pikachu` | Pop and print as a character. |
| `pika pika pi pikachu` | Push 2. Any other 4 word line. |
| _n_ words | Push _n_ - 2, for 5 or more words. |

Division rounds toward zero. A character is printed as one raw byte,
the value modulo 256.

## Commands on both stacks

| Command | Effect |
|---|---|
| `pi pika` | Copy the top of `pi pikachu` on to `pika pikachu`. |
| `pika pi` | Copy the top of `pika pikachu` on to `pi pikachu`. |
| `pikachu pikachu` | Jump if the tops of both stacks are equal. |
| `pika pika` | Jump if the tops of both stacks differ. |

The line after a jump is not a command. The number of words on it is the
line to jump to, counting the first line of the file as 1. When the jump
isn't taken, execution continues after that line. Jumps never pop.

## Example

Count down from the input, printing each number.

```text
pi pika pikachu
pi pika pikachu
pika pi pika pikachu
pi pika
pika pikachu pika pikachu
pi pi pikachu
pika pi pi pikachu
pika pika
pi pika pi pika
```

```text
$ pikachu countdown.pokeball 3
321
***DONE***
```

## Errors

Problems found before running are reported with the line they are on.
Jumping past the end of the program, to line 0, or to the jump itself
stops the program from running at all. Jumping to an address line is
allowed but earns a warning.

*/
